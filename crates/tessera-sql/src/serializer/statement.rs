use super::{Params, ToSql};

use tessera_core::stmt::Statement;

impl ToSql for &Statement<'_> {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Query(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Join(stmt) => stmt.to_sql(f),
        }
    }
}
