mod column;
pub use column::Column;

mod dataset;
pub use dataset::Dataset;

mod variable;
pub use variable::Variable;

use crate::Result;
use std::collections::HashSet;

/// Table-level schema for one dataset type: the table name plus the ordered
/// column declarations, and optionally the column holding the start date.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Table the dataset maps to
    pub table: String,

    /// Declared columns, in SELECT order
    pub columns: Vec<Column>,

    /// Column holding the start date, when the dataset has one
    pub date_start: Option<String>,
}

impl Schema {
    pub fn new(table: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            table: table.into(),
            columns,
            date_start: None,
        }
    }

    /// Declares which column holds the start date. Datasets without one are
    /// returned unfiltered, in query order.
    pub fn with_date_start(mut self, column: impl Into<String>) -> Self {
        self.date_start = Some(column.into());
        self
    }

    /// Declared column names, in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    /// Checks the schema invariants: column names are unique, and the
    /// date-start column, when declared, is one of the columns.
    pub fn verify(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(crate::Error::invalid_schema(format!(
                    "duplicate column `{}` in table `{}`",
                    column.name, self.table
                )));
            }
        }

        if let Some(date_start) = &self.date_start {
            if !seen.contains(date_start.as_str()) {
                return Err(crate::Error::invalid_schema(format!(
                    "date-start column `{}` is not declared in table `{}`",
                    date_start, self.table
                )));
            }
        }

        Ok(())
    }
}
