mod codec;
pub use codec::{bind, read, Bind, ColumnReader};

mod decode;
pub use decode::{decode_rows, Cursor};

pub mod operation;
pub use operation::Operation;

mod response;
pub use response::{Response, Rows};

use crate::async_trait;

use std::{borrow::Cow, fmt::Debug};

/// Opens connections to one database.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Connection URL the driver was configured with.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a new connection.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;
}

/// An open session with the database. Statements are rendered, bound and
/// executed inside [`exec`](Connection::exec).
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation
    async fn exec(&mut self, op: Operation<'_>) -> crate::Result<Response>;

    /// Rolls back the open transaction without waiting.
    ///
    /// Called when a transaction guard is dropped without being committed.
    fn start_rollback(&mut self);
}
