use super::Schema;
use crate::{stmt::Row, Result};
use chrono::NaiveDate;

/// A typed row schema mapped to one database table.
///
/// One schema describes the table and its columns; one instance holds the
/// bound variables of a single row. Instances are created fresh per row and
/// own their variables.
pub trait Dataset: Sized {
    /// Table name and column declarations for this dataset.
    fn schema() -> Schema;

    /// Loads an instance, populating variables from the given row.
    ///
    /// Columns the row carries but the dataset never declared are ignored;
    /// declared columns the row is missing bind null.
    fn load(row: &Row) -> Result<Self>;

    /// The bound start date, if the dataset has one.
    ///
    /// Datasets without a date column keep the default and are returned
    /// unfiltered, in query order.
    fn date_start(&self) -> Option<NaiveDate> {
        None
    }
}
