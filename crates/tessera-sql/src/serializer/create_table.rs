use super::{column_def::ColumnDef, Comma, Ident, Params, ToSql};

use tessera_core::{schema::Column, stmt};

struct PrimaryKey<'a>(&'a Column);

struct Unique<'a>(Vec<&'a str>);

impl ToSql for &stmt::CreateTable<'_> {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        let table = self.table;
        let columns = Comma(table.columns.iter().map(ColumnDef));
        let primary_key = table.primary_key().map(PrimaryKey);

        let unique: Vec<_> = table.unique_columns().map(|c| c.name.as_str()).collect();
        let unique = (!unique.is_empty()).then_some(Unique(unique));

        fmt!(f, "CREATE TABLE " Ident(&table.name) "(" columns primary_key unique ")");
    }
}

impl ToSql for PrimaryKey<'_> {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        fmt!(f, ", PRIMARY KEY(" Ident(&self.0.name) ")");
    }
}

impl ToSql for Unique<'_> {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        fmt!(f, ", UNIQUE(" Comma(self.0.into_iter().map(Ident)) ")");
    }
}
