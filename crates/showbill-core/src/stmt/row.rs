use super::Value;
use indexmap::IndexMap;

/// A single result row: an ordered mapping of column name to value.
///
/// Column names are unique within a row. Drivers produce rows in SELECT
/// column order; datasets hydrate from them by name, so a row may carry
/// columns the dataset never declared.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    columns: IndexMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a column value. A repeated column name overwrites the earlier
    /// value, keeping its original position.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|name| name.as_str())
    }
}

impl<C, V> FromIterator<(C, V)> for Row
where
    C: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}
