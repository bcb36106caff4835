use super::Operation;

/// A raw side-effect statement (inserts, cleanup). Answers with the number
/// of affected rows, never with a row set.
#[derive(Debug, Clone)]
pub struct ExecSql {
    /// The SQL text to execute
    pub sql: String,
}

impl ExecSql {
    pub fn new(sql: impl Into<String>) -> Self {
        Self { sql: sql.into() }
    }
}

impl From<ExecSql> for Operation {
    fn from(value: ExecSql) -> Self {
        Self::ExecSql(value)
    }
}
