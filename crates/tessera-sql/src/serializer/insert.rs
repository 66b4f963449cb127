use super::{Delimited, Ident, Param, Params, ToSql};

use tessera_core::{schema::Column, stmt};

/// One parenthesized VALUES group.
struct Row<'a> {
    columns: &'a [Column],
    values: &'a [stmt::Value],
}

impl ToSql for &stmt::Insert<'_> {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        let columns = &self.table.columns[..];
        let rows = self.rows.iter().map(|values| Row { columns, values });

        fmt!(f, "INSERT INTO " Ident(&self.table.name) " VALUES " Delimited(rows, ","));
    }
}

impl ToSql for Row<'_> {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        let params = self
            .values
            .iter()
            .zip(self.columns)
            .map(|(value, column)| Param {
                value,
                ty: Some(column.ty),
            });

        fmt!(f, "(" Delimited(params, ",") ")");
    }
}
