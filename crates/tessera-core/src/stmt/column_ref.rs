/// A column named in a GROUP BY or ORDER BY clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    /// A bare column name
    Column(String),

    /// A column qualified by its table
    Qualified { table: String, column: String },
}

impl ColumnRef {
    pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> ColumnRef {
        ColumnRef::Qualified {
            table: table.into(),
            column: column.into(),
        }
    }
}

impl From<&str> for ColumnRef {
    fn from(value: &str) -> ColumnRef {
        ColumnRef::Column(value.to_string())
    }
}

impl From<String> for ColumnRef {
    fn from(value: String) -> ColumnRef {
        ColumnRef::Column(value)
    }
}

impl From<(&str, &str)> for ColumnRef {
    fn from((table, column): (&str, &str)) -> ColumnRef {
        ColumnRef::qualified(table, column)
    }
}
