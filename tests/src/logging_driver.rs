use std::{
    borrow::Cow,
    sync::{Arc, Mutex},
};
use tessera_core::{
    async_trait,
    driver::{operation::Transaction, Connection, Driver, Operation, Response, Rows},
    Result,
};
use tessera_sql::Serializer;

pub type OpsLog = Arc<Mutex<Vec<DriverOp>>>;

#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Log of all operations executed through this driver
    ops_log: OpsLog,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> OpsLog {
        self.ops_log.clone()
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    fn url(&self) -> Cow<'_, str> {
        self.inner.url()
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(LoggingConnection {
            inner: self.inner.connect().await?,
            ops_log: self.ops_log_handle(),
        }))
    }
}

/// One operation that reached the driver, with its outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverOp {
    /// A statement, rendered as SQLite SQL
    Statement { sql: String, outcome: Outcome },

    /// A statement that failed validation before reaching the database
    Rejected,

    /// Transaction control
    Transaction(Transaction),

    /// A rollback started by a dropped transaction guard
    StartRollback,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Count(u64),
    Rows(usize),
    Failed,
}

impl DriverOp {
    pub fn sql(&self) -> Option<&str> {
        match self {
            DriverOp::Statement { sql, .. } => Some(sql),
            _ => None,
        }
    }
}

/// A connection wrapper that logs all operations for testing purposes
#[derive(Debug)]
pub struct LoggingConnection {
    /// The underlying connection that actually executes operations
    inner: Box<dyn Connection>,

    ops_log: OpsLog,
}

impl LoggingConnection {
    fn log(&self, op: DriverOp) {
        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(op);
    }
}

#[async_trait]
impl Connection for LoggingConnection {
    async fn exec(&mut self, operation: Operation<'_>) -> Result<Response> {
        let sql = match &operation {
            Operation::Statement(stmt) => match Serializer::sqlite().render(stmt) {
                Ok(rendered) => Some(rendered.sql),
                Err(_) => {
                    self.log(DriverOp::Rejected);
                    None
                }
            },
            Operation::Transaction(op) => {
                self.log(DriverOp::Transaction(*op));
                None
            }
        };

        let res = self.inner.exec(operation).await;

        if let Some(sql) = sql {
            let outcome = match &res {
                Ok(Response {
                    rows: Rows::Count(count),
                }) => Outcome::Count(*count),
                Ok(Response {
                    rows: Rows::Values(values),
                }) => Outcome::Rows(values.len()),
                Err(_) => Outcome::Failed,
            };
            self.log(DriverOp::Statement { sql, outcome });
        }

        res
    }

    fn start_rollback(&mut self) {
        self.log(DriverOp::StartRollback);
        self.inner.start_rollback();
    }
}
