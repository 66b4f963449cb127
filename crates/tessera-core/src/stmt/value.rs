use super::Type;
use crate::{Error, Result};

/// A dynamically typed value carrying its primitive kind.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Double precision float
    F64(f64),

    /// Single precision float
    F32(f32),

    /// Boolean value
    Bool(bool),

    /// String value
    String(String),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the kind of the value, or `None` for `Null`.
    pub const fn ty(&self) -> Option<Type> {
        match self {
            Self::Null => None,
            Self::I32(_) => Some(Type::I32),
            Self::I64(_) => Some(Type::I64),
            Self::F64(_) => Some(Type::F64),
            Self::F32(_) => Some(Type::F32),
            Self::Bool(_) => Some(Type::Bool),
            Self::String(_) => Some(Type::String),
        }
    }

    /// Returns `true` when the value may be stored in a slot of kind `ty`.
    /// `Null` fits every kind.
    pub fn is_a(&self, ty: Type) -> bool {
        self.ty().map_or(true, |actual| actual == ty)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! impl_value_conversions {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(src: $ty) -> Value {
                    Value::$variant(src)
                }
            }

            impl From<&$ty> for Value {
                fn from(src: &$ty) -> Value {
                    Value::$variant(src.clone())
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<$ty> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        value => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

impl_value_conversions! {
    i32 => I32,
    i64 => I64,
    f64 => F64,
    f32 => F32,
    bool => Bool,
    String => String,
}

impl From<&str> for Value {
    fn from(src: &str) -> Value {
        Value::String(src.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Value {
        match src {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}
