use super::{Comma, Ident, Params, Period, Prefixed, ToSql};

use tessera_core::stmt::{self, ColumnRef};

impl ToSql for &stmt::Join<'_> {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        let (left, right) = (&self.left.name, &self.right.name);
        let kind = self.kind.as_str();

        // Left side first, then right; each column qualified by its table.
        let projection = self
            .left_columns
            .iter()
            .map(|column| Period([Ident(left), Ident(column)]))
            .chain(
                self.right_columns
                    .iter()
                    .map(|column| Period([Ident(right), Ident(column)])),
            );

        let on = self.on.as_ref().map(|cond| Prefixed(" ON ", cond));
        let filter = self.filter.as_ref().map(|cond| Prefixed(" WHERE ", cond));
        let group_by = self.group_by.as_ref().map(|c| Prefixed(" GROUP BY ", c));
        let order_by = self.order_by.as_ref().map(|c| Prefixed(" ORDER BY ", c));
        let direction = self.direction.map(|dir| Prefixed(" ", dir));

        fmt!(
            f,
            "SELECT " Comma(projection)
            " FROM " Ident(left) " " kind " " Ident(right)
            on filter group_by order_by direction
        );
    }
}

impl ToSql for &ColumnRef {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        match self {
            ColumnRef::Column(column) => fmt!(f, Ident(column)),
            ColumnRef::Qualified { table, column } => {
                fmt!(f, Period([Ident(table), Ident(column)]))
            }
        }
    }
}
