#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited, Period, Prefixed};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder, Rendered, TypedValue};
use params::Param;

// Fragment serializers
mod column_def;
mod create_table;
mod delete;
mod fragment;
mod insert;
mod join;
mod query;
mod statement;
mod ty;
mod update;

use tessera_core::{driver::operation::Transaction, stmt::Statement, Result};

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    /// Renders `stmt`, pushing its bound values to `params` in placeholder order.
    ///
    /// The statement is validated first; on error nothing is written to `params`.
    pub fn serialize(&self, stmt: &Statement<'_>, params: &mut impl Params) -> Result<String> {
        stmt.validate()?;

        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        Ok(ret)
    }

    /// Renders `stmt` into SQL text plus its ordered parameters.
    pub fn render(&self, stmt: &Statement<'_>) -> Result<Rendered> {
        let mut params = Vec::<TypedValue>::new();
        let sql = self.serialize(stmt, &mut params)?;
        Ok(Rendered { sql, params })
    }

    /// Serialize a transaction control operation to a SQL string.
    pub fn serialize_transaction(&self, op: Transaction) -> &'static str {
        match op {
            Transaction::Start => match self.flavor {
                Flavor::Mysql => "START TRANSACTION",
                Flavor::Postgresql | Flavor::Sqlite => "BEGIN",
            },
            Transaction::Commit => "COMMIT",
            Transaction::Rollback => "ROLLBACK",
        }
    }
}
