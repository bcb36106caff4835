mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use showbill_core::{
    async_trait,
    driver::{operation::Operation, Driver, Response},
    schema::Schema,
    stmt, Error, Result,
};
use showbill_sql as sql;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| Error::invalid_connection_url(err.to_string()))?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    async fn connect(&self) -> Result<Box<dyn showbill_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;

        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;

        Ok(Self { connection })
    }
}

#[async_trait]
impl showbill_core::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        let (select, ret) = match op {
            Operation::QuerySql(op) => (op.stmt, op.ret),
            Operation::ExecSql(op) => {
                tracing::debug!(sql = %op.sql, "exec");

                let count = self
                    .connection
                    .execute(&op.sql, [])
                    .map_err(Error::driver)?;

                return Ok(Response::count(count as u64));
            }
        };

        let sql_str = sql::Serializer::sqlite().serialize(&sql::Statement::query(&select));

        tracing::debug!(sql = %sql_str, "query");

        let mut stmt = self
            .connection
            .prepare_cached(&sql_str)
            .map_err(Error::driver)?;

        let mut rows = stmt.query([]).map_err(Error::driver)?;

        let mut ret_rows = vec![];

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut out = stmt::Row::new();

                    for (index, column) in select.columns.iter().enumerate() {
                        let ty = ret.as_ref().and_then(|tys| tys.get(index));
                        let value = Value::from_sql(row, index, ty)?;
                        out.insert(column.clone(), value.into_inner());
                    }

                    ret_rows.push(out);
                }
                Ok(None) => break,
                Err(err) => {
                    return Err(Error::driver(err));
                }
            }
        }

        Ok(Response::rows(ret_rows))
    }

    async fn push_schema(&mut self, schema: &Schema) -> Result<()> {
        let sql_str =
            sql::Serializer::sqlite().serialize(&sql::Statement::create_table(schema));

        tracing::debug!(sql = %sql_str, "push_schema");

        self.connection
            .execute(&sql_str, [])
            .map_err(Error::driver)?;

        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        // rusqlite closes the underlying handle on drop
        Ok(())
    }
}
