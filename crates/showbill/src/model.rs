use crate::{Dataset, Result};
use chrono::Local;
use showbill_core::{driver::operation::QuerySql, schema::Schema, stmt, Connection};
use std::{marker::PhantomData, sync::Arc};
use tokio::sync::Mutex;

/// A shared handle to a driver connection.
///
/// The model borrows the connection per query; opening and closing it stays
/// with the caller.
pub type SharedConnection = Arc<Mutex<Box<dyn Connection>>>;

/// Orchestrates query construction, execution, hydration, filtering, and
/// sorting for one dataset type.
pub struct Model<D> {
    connection: SharedConnection,
    schema: Schema,
    _p: PhantomData<D>,
}

impl<D: Dataset> Model<D> {
    /// Creates a model owning the given connection.
    ///
    /// Fails if the dataset schema does not verify.
    pub fn new(connection: Box<dyn Connection>) -> Result<Self> {
        Self::shared(Arc::new(Mutex::new(connection)))
    }

    /// Creates a model on a connection shared with other models or with the
    /// caller.
    pub fn shared(connection: SharedConnection) -> Result<Self> {
        let schema = D::schema();
        schema.verify()?;

        Ok(Self {
            connection,
            schema,
            _p: PhantomData,
        })
    }

    /// Fetches all upcoming datasets, sorted ascending by start date.
    ///
    /// Issues exactly one `SELECT` over the declared columns, hydrates one
    /// dataset per row, drops rows dated today or earlier, and stable-sorts
    /// the rest. Datasets without a date column skip the filter and sort and
    /// come back in query order. A driver failure propagates unchanged.
    pub async fn get_datasets(&self) -> Result<Vec<D>> {
        let op = QuerySql {
            stmt: stmt::Select::new(self.schema.table.as_str(), self.schema.column_names()),
            ret: Some(self.schema.columns.iter().map(|c| c.ty.clone()).collect()),
        };

        tracing::debug!(table = %self.schema.table, "loading datasets");

        let response = self.connection.lock().await.exec(op.into()).await?;
        let rows = response.rows.into_values()?;

        let mut datasets = Vec::with_capacity(rows.len());
        for row in &rows {
            datasets.push(D::load(row)?);
        }

        if self.schema.date_start.is_some() {
            let today = Local::now().date_naive();

            // A null date is never after today, so it drops out here too
            datasets.retain(|dataset| match dataset.date_start() {
                Some(date) => date > today,
                None => false,
            });

            // Stable: equal dates keep query order
            datasets.sort_by_key(|dataset| dataset.date_start());
        }

        Ok(datasets)
    }
}

impl<D> std::fmt::Debug for Model<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("table", &self.schema.table)
            .finish()
    }
}
