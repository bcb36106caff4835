use super::Value;
use crate::Result;
use chrono::NaiveDate;

/// Declared type of a column.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Bool,
    Date,
    I64,
    String,
}

impl Type {
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Date)
    }

    pub const fn is_i64(&self) -> bool {
        matches!(self, Self::I64)
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    /// Casts a raw value to this type.
    ///
    /// Null passes through. Integers cast to booleans the way SQL storage
    /// represents them (0/1), and `%Y-%m-%d` strings cast to dates. Anything
    /// else is a type conversion error.
    pub fn cast(&self, value: Value) -> Result<Value> {
        match (self, value) {
            (_, Value::Null) => Ok(Value::Null),
            (Self::Bool, Value::Bool(v)) => Ok(Value::Bool(v)),
            (Self::Bool, Value::I64(v)) => Ok(Value::Bool(v != 0)),
            (Self::Date, Value::Date(v)) => Ok(Value::Date(v)),
            (Self::Date, Value::String(v)) => match NaiveDate::parse_from_str(&v, "%Y-%m-%d") {
                Ok(date) => Ok(Value::Date(date)),
                Err(_) => Err(crate::Error::type_conversion(Value::String(v), "NaiveDate")),
            },
            (Self::I64, Value::I64(v)) => Ok(Value::I64(v)),
            (Self::String, Value::String(v)) => Ok(Value::String(v)),
            (_, value) => Err(crate::Error::type_conversion(value, self.name())),
        }
    }

    const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Date => "Date",
            Self::I64 => "I64",
            Self::String => "String",
        }
    }
}
