pub mod operation;
pub use operation::Operation;

mod response;
pub use response::{Response, Rows};

use crate::{async_trait, schema::Schema, Result};

use std::{borrow::Cow, fmt::Debug};

/// A database driver, capable of opening connections.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Connection URL for this driver.
    fn url(&self) -> Cow<'_, str>;

    /// Open a new connection to the database.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A single database connection.
///
/// The connection's lifecycle is owned by the caller: the model executes
/// operations through it but never opens or closes it.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation.
    async fn exec(&mut self, op: Operation) -> Result<Response>;

    /// Create the table described by the schema.
    async fn push_schema(&mut self, schema: &Schema) -> Result<()>;

    /// Close the connection, releasing any resources.
    async fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
