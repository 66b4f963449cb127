use crate::stmt;

/// Length used for `String` columns when none is configured.
pub const DEFAULT_VARCHAR_LEN: u64 = 255;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The primitive kind stored in the column.
    pub ty: stmt::Type,

    /// Whether or not the column accepts NULL
    pub nullable: bool,

    /// True if the column is the table's primary key
    pub primary_key: bool,

    /// True if the column carries a UNIQUE constraint
    pub unique: bool,

    /// Maximum length of a `String` column. Ignored for other kinds.
    pub max_len: Option<u64>,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: stmt::Type) -> Column {
        Column {
            name: name.into(),
            ty,
            nullable: false,
            primary_key: false,
            unique: false,
            max_len: None,
        }
    }

    pub fn nullable(mut self) -> Column {
        self.nullable = true;
        self
    }

    pub fn primary_key(mut self) -> Column {
        self.primary_key = true;
        self
    }

    pub fn unique(mut self) -> Column {
        self.unique = true;
        self
    }

    /// Sets the bounded length rendered for a `String` column.
    pub fn max_len(mut self, len: u64) -> Column {
        self.max_len = Some(len);
        self
    }

    pub fn varchar_len(&self) -> u64 {
        self.max_len.unwrap_or(DEFAULT_VARCHAR_LEN)
    }
}
