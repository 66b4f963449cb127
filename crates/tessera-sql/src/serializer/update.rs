use super::{Ident, Params, Prefixed, ToSql};

use tessera_core::stmt;

impl ToSql for &stmt::Update<'_> {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        let assignments = &self.assignments;
        let filter = self.filter.as_ref().map(|cond| Prefixed(" WHERE ", cond));

        fmt!(f, "UPDATE " Ident(&self.table.name) " SET " assignments filter);
    }
}
