use tessera::{Column, Table, Type};

pub fn users() -> Table {
    Table::new("users")
        .column(Column::new("id", Type::I64).primary_key())
        .column(Column::new("name", Type::String))
        .column(Column::new("email", Type::String).unique())
}

pub fn posts() -> Table {
    Table::new("posts")
        .column(Column::new("id", Type::I64).primary_key())
        .column(Column::new("user_id", Type::I64))
        .column(Column::new("title", Type::String).max_len(120))
        .column(Column::new("score", Type::I32).nullable())
}

/// One column of every kind.
pub fn kinds() -> Table {
    Table::new("kinds")
        .column(Column::new("a", Type::I32).primary_key())
        .column(Column::new("b", Type::I64))
        .column(Column::new("c", Type::F64))
        .column(Column::new("d", Type::F32))
        .column(Column::new("e", Type::Bool))
        .column(Column::new("f", Type::String))
}
