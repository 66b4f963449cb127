mod column_ref;
pub use column_ref::ColumnRef;

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod direction;
pub use direction::Direction;

mod fragment;
pub use fragment::{Fragment, Piece};

mod insert;
pub use insert::Insert;

mod join;
pub use join::Join;

mod query;
pub use query::Query;

mod ty;
pub use ty::Type;

mod update;
pub use update::Update;

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;

use crate::Result;

/// A single SQL intent, ready to be rendered by a dialect serializer.
#[derive(Debug, Clone)]
pub enum Statement<'a> {
    CreateTable(CreateTable<'a>),
    Query(Query<'a>),
    Insert(Insert<'a>),
    Update(Update<'a>),
    Delete(Delete<'a>),
    Join(Join<'a>),
}

impl Statement<'_> {
    /// Checks the statement against the tables it references.
    ///
    /// Every failure a serializer can hit is reported here, so a statement that
    /// passes validation always renders completely.
    pub fn validate(&self) -> Result<()> {
        match self {
            Statement::CreateTable(stmt) => stmt.validate(),
            Statement::Query(stmt) => stmt.validate(),
            Statement::Insert(stmt) => stmt.validate(),
            Statement::Update(stmt) => stmt.validate(),
            Statement::Delete(stmt) => stmt.validate(),
            Statement::Join(stmt) => stmt.validate(),
        }
    }

    /// Returns the kinds of the columns produced by the statement, or `None`
    /// when the statement only reports an affected-row count.
    pub fn returning(&self) -> Result<Option<Vec<Type>>> {
        match self {
            Statement::Query(stmt) => Ok(Some(stmt.table.column_types())),
            Statement::Join(stmt) => stmt.returning().map(Some),
            _ => Ok(None),
        }
    }

    /// Short name used when logging.
    pub fn name(&self) -> &'static str {
        match self {
            Statement::CreateTable(_) => "create_table",
            Statement::Query(_) => "query",
            Statement::Insert(_) => "insert",
            Statement::Update(_) => "update",
            Statement::Delete(_) => "delete",
            Statement::Join(_) => "join",
        }
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Statement::Query(_) | Statement::Join(_))
    }
}
