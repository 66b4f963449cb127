use crate::{Error, Result};

/// The closed set of primitive kinds Tessera can bind and decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Double precision float
    F64,

    /// Single precision float
    F32,

    /// Boolean
    Bool,

    /// Text
    String,
}

impl Type {
    /// Parses a SQL column type name into a primitive kind.
    ///
    /// Accepts the names the serializer emits for any flavor, case-insensitively,
    /// plus a few common synonyms.
    pub fn from_sql_name(name: &str) -> Result<Type> {
        let normalized = name.trim().to_ascii_uppercase();
        let base = match normalized.find('(') {
            Some(pos) => normalized[..pos].trim_end(),
            None => normalized.as_str(),
        };

        match base {
            "INT" | "INTEGER" | "INT4" => Ok(Type::I32),
            "BIGINT" | "INT8" => Ok(Type::I64),
            "DOUBLE" | "DOUBLE PRECISION" | "FLOAT8" => Ok(Type::F64),
            "FLOAT" | "REAL" | "FLOAT4" => Ok(Type::F32),
            "BOOLEAN" | "BOOL" => Ok(Type::Bool),
            "VARCHAR" | "TEXT" | "CHARACTER VARYING" => Ok(Type::String),
            _ => Err(Error::unsupported_kind(format!("SQL type `{}`", name))),
        }
    }
}
