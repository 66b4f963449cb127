use super::{Ident, Params, Prefixed, ToSql};

use tessera_core::stmt;

impl ToSql for &stmt::Delete<'_> {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        let filter = self.filter.as_ref().map(|cond| Prefixed(" WHERE ", cond));

        fmt!(f, "DELETE FROM " Ident(&self.table.name) filter);
    }
}
