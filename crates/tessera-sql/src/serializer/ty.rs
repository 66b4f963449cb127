use super::{Flavor, Params, ToSql};

use tessera_core::{schema::Column, stmt::Type};

/// The storage type name of a column in the serializer's dialect.
pub(super) struct ColumnType<'a>(pub(super) &'a Column);

impl ToSql for ColumnType<'_> {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        let flavor = f.serializer.flavor;

        let name = match (self.0.ty, flavor) {
            (Type::I32, Flavor::Postgresql) => "INTEGER",
            (Type::I32, _) => "INT",
            (Type::I64, _) => "BIGINT",
            (Type::F64, Flavor::Postgresql) => "DOUBLE PRECISION",
            (Type::F64, _) => "DOUBLE",
            (Type::F32, Flavor::Postgresql) => "REAL",
            (Type::F32, _) => "FLOAT",
            (Type::Bool, _) => "BOOLEAN",
            (Type::String, _) => {
                let len = self.0.varchar_len().to_string();
                fmt!(f, "VARCHAR(" len.as_str() ")");
                return;
            }
        };

        fmt!(f, name);
    }
}
