use crate::{stmt::Row, Result};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, as a sequence of rows
    Values(Vec<Row>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn rows(rows: Vec<Row>) -> Self {
        Self {
            rows: Rows::Values(rows),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Self::Count(count) => Ok(count),
            Self::Values(_) => Err(crate::Error::invalid_result(
                "expected an affected-row count, got rows",
            )),
        }
    }

    pub fn into_values(self) -> Result<Vec<Row>> {
        match self {
            Self::Values(rows) => Ok(rows),
            Self::Count(_) => Err(crate::Error::invalid_result(
                "expected rows, got an affected-row count",
            )),
        }
    }
}
