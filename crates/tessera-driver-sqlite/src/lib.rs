mod value;
use value::{SqliteCursor, Slots};

use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use tessera_core::{
    async_trait,
    driver::{self, operation::Operation, Driver, Response},
    stmt::Statement,
    Error, Result,
};
use tessera_sql::Serializer;
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    ///
    /// Accepts `sqlite::memory:`, `sqlite:/path/to/db` and `sqlite:///path/to/db`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        match url.path() {
            ":memory:" => Ok(Self::InMemory),
            "" => Err(Error::invalid_connection_url(format!(
                "connection URL has no database path; url={url_str}"
            ))),
            path => Ok(Self::File(PathBuf::from(path))),
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

    async fn connect(&self) -> Result<Box<dyn tessera_core::Connection>> {
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
    serializer: Serializer,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Ok(Self::from_rusqlite(connection))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self::from_rusqlite(connection))
    }

    fn from_rusqlite(connection: RusqliteConnection) -> Self {
        Self {
            connection,
            serializer: Serializer::sqlite(),
        }
    }

    fn exec_statement(&mut self, stmt: &Statement<'_>) -> Result<Response> {
        let ret_tys = stmt.returning()?;
        let rendered = self.serializer.render(stmt)?;

        tracing::debug!(
            stmt = stmt.name(),
            sql = %rendered.sql,
            params = rendered.params.len(),
            "executing statement"
        );

        let mut prepared = self
            .connection
            .prepare(&rendered.sql)
            .map_err(Error::driver_operation_failed)?;

        let mut slots = Slots(&mut prepared);
        for (index, param) in rendered.params.iter().enumerate() {
            driver::bind(&mut slots, index + 1, &param.value, param.ty)?;
        }

        let Some(ret_tys) = ret_tys else {
            let count = prepared
                .raw_execute()
                .map_err(Error::driver_operation_failed)?;
            return Ok(Response::count(count as u64));
        };

        let mut cursor = SqliteCursor::new(prepared.raw_query());
        let rows = driver::decode_rows(&mut cursor, &ret_tys)?;

        Ok(Response::values(rows))
    }
}

#[async_trait]
impl tessera_core::driver::Connection for Connection {
    async fn exec(&mut self, op: Operation<'_>) -> Result<Response> {
        match op {
            Operation::Statement(stmt) => self.exec_statement(&stmt),
            Operation::Transaction(op) => {
                let sql = self.serializer.serialize_transaction(op);
                tracing::debug!(sql, "executing transaction control");

                self.connection
                    .execute_batch(sql)
                    .map_err(Error::driver_operation_failed)?;
                Ok(Response::count(0))
            }
        }
    }

    fn start_rollback(&mut self) {
        if self.connection.is_autocommit() {
            return;
        }

        if let Err(err) = self.connection.execute_batch("ROLLBACK") {
            tracing::warn!(error = %err, "failed to roll back abandoned transaction");
        }
    }
}
