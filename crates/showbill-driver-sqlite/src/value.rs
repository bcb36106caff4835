use rusqlite::{types::Value as SqlValue, Row};
use showbill_core::{stmt, Error, Result};

/// Bridge between SQLite storage values and core values.
#[derive(Debug)]
pub(crate) struct Value(stmt::Value);

impl Value {
    /// Converts this SQLite driver value into the core value.
    pub(crate) fn into_inner(self) -> stmt::Value {
        self.0
    }

    /// Converts a SQLite value within a row to a core value.
    ///
    /// The declared column type directs the decoding: INTEGER storage backs
    /// both I64 and Bool, TEXT storage backs both String and Date. A stored
    /// value the declared type cannot cast decodes as null rather than
    /// failing the query. Without a declared type the storage class maps
    /// directly.
    pub(crate) fn from_sql(row: &Row, index: usize, ty: Option<&stmt::Type>) -> Result<Self> {
        let value: SqlValue = row.get(index).map_err(Error::driver)?;

        let raw = match value {
            SqlValue::Null => stmt::Value::Null,
            SqlValue::Integer(value) => stmt::Value::I64(value),
            SqlValue::Text(value) => stmt::Value::String(value),
            SqlValue::Real(_) => {
                return Err(Error::invalid_result(format!(
                    "unsupported REAL storage class at column {index}"
                )))
            }
            SqlValue::Blob(_) => {
                return Err(Error::invalid_result(format!(
                    "unsupported BLOB storage class at column {index}"
                )))
            }
        };

        let core_value = match ty {
            Some(ty) => ty.cast(raw).unwrap_or(stmt::Value::Null),
            None => raw,
        };

        Ok(Value(core_value))
    }
}
