use super::Column;
use crate::{stmt, Error, Result};

/// Description of a table: its name and ordered columns.
///
/// Column order is significant. It fixes the positional binding order of
/// `INSERT` rows and the positional decoding order of `SELECT *` results.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// The name of the table in the database.
    pub name: String,

    /// Columns in declaration order
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Table {
        Table {
            name: name.into(),
            columns: vec![],
        }
    }

    pub fn column(mut self, column: Column) -> Table {
        self.columns.push(column);
        self
    }

    /// Returns the first column flagged as primary key.
    pub fn primary_key(&self) -> Option<&Column> {
        self.columns.iter().find(|column| column.primary_key)
    }

    pub fn unique_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| column.unique)
    }

    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Looks up a column by name, failing when the table has no such column.
    pub fn resolve_column(&self, name: &str) -> Result<&Column> {
        self.find_column(name).ok_or_else(|| {
            Error::schema_violation(format!(
                "table `{}` has no column `{}`",
                self.name, name
            ))
        })
    }

    /// Declared kinds of every column, in order.
    pub fn column_types(&self) -> Vec<stmt::Type> {
        self.columns.iter().map(|column| column.ty).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stmt::Type;

    fn users() -> Table {
        Table::new("users")
            .column(Column::new("id", Type::I64).primary_key())
            .column(Column::new("name", Type::String))
            .column(Column::new("email", Type::String).unique())
            .column(Column::new("handle", Type::String).unique().nullable())
    }

    #[test]
    fn primary_key_is_first_flagged_column() {
        let table = users();
        assert_eq!(table.primary_key().map(|c| c.name.as_str()), Some("id"));
    }

    #[test]
    fn no_primary_key() {
        let table = Table::new("logs").column(Column::new("line", Type::String));
        assert!(table.primary_key().is_none());
    }

    #[test]
    fn unique_columns_keep_declaration_order() {
        let table = users();
        let names: Vec<_> = table.unique_columns().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["email", "handle"]);
    }

    #[test]
    fn column_types_follow_declaration_order() {
        assert_eq!(
            users().column_types(),
            [Type::I64, Type::String, Type::String, Type::String]
        );
    }

    #[test]
    fn resolve_unknown_column() {
        let err = users().resolve_column("age").unwrap_err();
        assert!(err.is_schema_violation());
        assert_eq!(
            err.to_string(),
            "schema violation: table `users` has no column `age`"
        );
    }
}
