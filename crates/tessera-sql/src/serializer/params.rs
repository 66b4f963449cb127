use super::{Flavor, Formatter, ToSql};

use tessera_core::stmt::{Type, Value};

pub trait Params {
    fn push(&mut self, param: &Value, ty: Option<Type>) -> Placeholder;
}

/// 1-based position of a bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

/// A bound parameter together with the kind declared for its slot, when known.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    pub value: Value,
    pub ty: Option<Type>,
}

/// SQL text plus its parameters in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub sql: String,
    pub params: Vec<TypedValue>,
}

impl Params for Vec<TypedValue> {
    fn push(&mut self, value: &Value, ty: Option<Type>) -> Placeholder {
        self.push(TypedValue {
            value: value.clone(),
            ty,
        });
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) {
        match f.serializer.flavor {
            Flavor::Mysql | Flavor::Sqlite => f.dst.push('?'),
            Flavor::Postgresql => {
                f.dst.push('$');
                f.dst.push_str(&self.0.to_string());
            }
        }
    }
}

/// A value bound in place, rendered as its placeholder.
pub(super) struct Param<'a> {
    pub(super) value: &'a Value,
    pub(super) ty: Option<Type>,
}

impl ToSql for Param<'_> {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self.value, self.ty);
        fmt!(f, placeholder);
    }
}
