use super::{ty::ColumnType, Ident, Params, ToSql};

use tessera_core::schema::Column;

/// A column definition inside `CREATE TABLE`.
pub(super) struct ColumnDef<'a>(pub(super) &'a Column);

impl ToSql for ColumnDef<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let column = self.0;
        let not_null = (!column.nullable).then_some(" NOT NULL");

        fmt!(f, Ident(&column.name) " " ColumnType(column) not_null)
    }
}
