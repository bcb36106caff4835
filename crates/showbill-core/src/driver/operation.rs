mod exec_sql;
pub use exec_sql::ExecSql;

mod query_sql;
pub use query_sql::QuerySql;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Execute a raw SQL statement, answering with an affected-row count
    ExecSql(ExecSql),

    /// Execute a SQL query, answering with rows
    QuerySql(QuerySql),
}
