use super::{Param, Params, ToSql};

use tessera_core::stmt::{Direction, Fragment, Piece};

impl ToSql for &Fragment {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        for piece in self.pieces() {
            match piece {
                Piece::Sql(sql) => fmt!(f, sql),
                Piece::Param(value) => fmt!(f, Param { value, ty: None }),
            }
        }
    }
}

impl ToSql for Direction {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        fmt!(f, self.as_sql());
    }
}
