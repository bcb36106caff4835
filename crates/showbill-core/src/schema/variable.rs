use crate::{
    stmt::{Row, Type, Value},
    Result,
};

/// A named scalar holder backing one dataset column.
///
/// A variable starts unbound (schema declaration) and is bound at most once
/// per hydration cycle. Reading an unbound variable yields [`Value::Null`];
/// binding a bound variable is an error. The name is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    value: Option<Value>,
}

impl Variable {
    /// Creates an unbound variable.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Creates a variable already bound to a value.
    pub fn bound(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound value, or [`Value::Null`] while unbound.
    pub fn value(&self) -> &Value {
        self.value.as_ref().unwrap_or(&Value::Null)
    }

    pub fn is_bound(&self) -> bool {
        self.value.is_some()
    }

    /// Binds the value. Fails if the variable is already bound.
    pub fn bind(&mut self, value: impl Into<Value>) -> Result<()> {
        if self.value.is_some() {
            return Err(crate::Error::already_bound(&self.name));
        }

        self.value = Some(value.into());
        Ok(())
    }

    /// Produces a bound variable for one declared column of a result row.
    ///
    /// A missing column binds null, and so does a raw value the declared
    /// type cannot cast. Hydration never fails on row data.
    pub fn hydrate(name: &str, ty: Type, row: &Row) -> Self {
        let value = match row.get(name) {
            Some(value) => ty.cast(value.clone()).unwrap_or(Value::Null),
            None => Value::Null,
        };

        Self::bound(name, value)
    }
}
