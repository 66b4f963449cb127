mod builder;
mod connect;
mod transaction;

pub use builder::Builder;
pub use connect::Connect;
pub use transaction::Transaction;

use crate::{driver::Connection, Load, Result, Statement};

use tessera_core::{schema::Table, stmt::CreateTable, stmt::ValueRecord};

use std::sync::Arc;

/// A database session. Each `Db` owns one connection; statements run in
/// the order they are issued.
pub struct Db {
    connection: Box<dyn Connection>,

    /// Tables registered through the [`Builder`]
    tables: Vec<Arc<Table>>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects to `url` with no registered tables.
    pub async fn connect(url: &str) -> Result<Db> {
        Db::builder().connect(url).await
    }

    /// Tables registered through the builder, in registration order.
    pub fn tables(&self) -> &[Arc<Table>] {
        &self.tables
    }

    /// Finds a registered table by name.
    pub fn table(&self, name: &str) -> Option<&Arc<Table>> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Execute a statement, returning the number of affected rows
    pub async fn exec<'a>(&mut self, stmt: impl Into<Statement<'a>>) -> Result<u64> {
        let stmt: Statement<'a> = stmt.into();
        let name = stmt.name();

        let count = self.connection.exec(stmt.into()).await?.rows.into_count()?;
        tracing::debug!(stmt = name, count, "statement executed");

        Ok(count)
    }

    /// Execute a query, loading every returned row as `T`
    pub async fn all<'a, T: Load>(&mut self, stmt: impl Into<Statement<'a>>) -> Result<Vec<T>> {
        self.all_with(stmt, T::load).await
    }

    /// Execute a query, mapping every returned row with `f`
    pub async fn all_with<'a, T>(
        &mut self,
        stmt: impl Into<Statement<'a>>,
        f: impl FnMut(ValueRecord) -> Result<T>,
    ) -> Result<Vec<T>> {
        let records = self.query(stmt.into()).await?;
        records.into_iter().map(f).collect()
    }

    /// Execute a query, loading only the first returned row
    pub async fn first<'a, T: Load>(
        &mut self,
        stmt: impl Into<Statement<'a>>,
    ) -> Result<Option<T>> {
        let records = self.query(stmt.into()).await?;
        records.into_iter().next().map(T::load).transpose()
    }

    /// Creates `table` on the database.
    pub async fn create_table(&mut self, table: &Table) -> Result<()> {
        self.exec(CreateTable::new(table)).await?;
        Ok(())
    }

    /// Creates every registered table, in registration order.
    pub async fn push_schema(&mut self) -> Result<()> {
        for table in self.tables.clone() {
            self.create_table(&table).await?;
        }

        Ok(())
    }

    /// Starts a transaction. It is rolled back unless committed.
    pub async fn transaction(&mut self) -> Result<Transaction<'_>> {
        Transaction::start(self).await
    }

    async fn query(&mut self, stmt: Statement<'_>) -> Result<Vec<ValueRecord>> {
        let name = stmt.name();

        let records = self.connection.exec(stmt.into()).await?.rows.into_values()?;
        tracing::debug!(stmt = name, rows = records.len(), "query executed");

        Ok(records)
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("connection", &self.connection)
            .field("tables", &self.tables.len())
            .finish()
    }
}
