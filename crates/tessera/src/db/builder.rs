use super::{Connect, Db};
use crate::{driver::Driver, Result};

use tessera_core::schema::Table;

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    /// Tables known to the session
    tables: Vec<Arc<Table>>,

    /// Create the registered tables as soon as the connection is open
    push_schema: bool,
}

impl Builder {
    pub fn register(&mut self, table: impl Into<Arc<Table>>) -> &mut Self {
        self.tables.push(table.into());
        self
    }

    /// Create every registered table once connected.
    pub fn push_schema(&mut self) -> &mut Self {
        self.push_schema = true;
        self
    }

    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        self.build(Connect::new(url)?).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        tracing::debug!(url = %driver.url(), tables = self.tables.len(), "connecting");

        let mut db = Db {
            connection: driver.connect().await?,
            tables: self.tables.clone(),
        };

        if self.push_schema {
            db.push_schema().await?;
        }

        Ok(db)
    }
}
