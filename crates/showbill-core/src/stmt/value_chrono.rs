use chrono::NaiveDate;

use crate::stmt::Value;

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl TryFrom<Value> for NaiveDate {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Date(value) => Ok(value),
            _ => Err(crate::Error::type_conversion(value, "NaiveDate")),
        }
    }
}
