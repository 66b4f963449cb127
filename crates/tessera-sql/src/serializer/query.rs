use super::{Ident, Params, Period, Prefixed, ToSql};

use tessera_core::stmt;

impl ToSql for &stmt::Query<'_> {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        let table = &self.table.name;

        let filter = self.filter.as_ref().map(|cond| Prefixed(" WHERE ", cond));
        let group_by = self
            .group_by
            .as_ref()
            .map(|column| Prefixed(" GROUP BY ", Period([Ident(table), Ident(column)])));
        let order_by = self
            .order_by
            .as_ref()
            .map(|column| Prefixed(" ORDER BY ", Period([Ident(table), Ident(column)])));
        let direction = self.direction.map(|dir| Prefixed(" ", dir));

        fmt!(f, "SELECT * FROM " Ident(table) filter group_by order_by direction);
    }
}
