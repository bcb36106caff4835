use showbill::{
    driver::{operation::ExecSql, Driver},
    sqlite::Sqlite,
    Connection, Schema, SharedConnection,
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Opens a fresh in-memory SQLite database and creates each given table.
pub async fn connect(schemas: &[Schema]) -> SharedConnection {
    let driver = Sqlite::in_memory();
    let mut connection = driver.connect().await.unwrap();

    for schema in schemas {
        connection.push_schema(schema).await.unwrap();
    }

    Arc::new(Mutex::new(connection))
}

/// Runs a raw SQL statement on the shared connection, returning the
/// affected-row count.
pub async fn exec_sql(connection: &SharedConnection, sql: &str) -> showbill::Result<u64> {
    let response = connection
        .lock()
        .await
        .exec(ExecSql::new(sql).into())
        .await?;

    response.rows.into_count()
}
