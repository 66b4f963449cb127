use crate::{
    stmt::{Type, Value},
    Error, Result,
};

/// A prepared statement's parameter slots. Positions are 1-based.
pub trait Bind {
    fn bind_i32(&mut self, position: usize, value: i32) -> Result<()>;

    fn bind_i64(&mut self, position: usize, value: i64) -> Result<()>;

    fn bind_f64(&mut self, position: usize, value: f64) -> Result<()>;

    fn bind_f32(&mut self, position: usize, value: f32) -> Result<()>;

    fn bind_bool(&mut self, position: usize, value: bool) -> Result<()>;

    fn bind_string(&mut self, position: usize, value: &str) -> Result<()>;

    fn bind_null(&mut self, position: usize) -> Result<()>;
}

/// Typed access to the columns of the row a cursor is positioned at.
/// Indices are 1-based.
///
/// A getter must fail with an unsupported-kind error when the stored value
/// cannot be read as the requested kind. Getters never widen or narrow.
pub trait ColumnReader {
    fn is_null(&self, index: usize) -> Result<bool>;

    fn get_i32(&self, index: usize) -> Result<i32>;

    fn get_i64(&self, index: usize) -> Result<i64>;

    fn get_f64(&self, index: usize) -> Result<f64>;

    fn get_f32(&self, index: usize) -> Result<f32>;

    fn get_bool(&self, index: usize) -> Result<bool>;

    fn get_string(&self, index: usize) -> Result<String>;
}

impl<R: ColumnReader + ?Sized> ColumnReader for &R {
    fn is_null(&self, index: usize) -> Result<bool> {
        (**self).is_null(index)
    }

    fn get_i32(&self, index: usize) -> Result<i32> {
        (**self).get_i32(index)
    }

    fn get_i64(&self, index: usize) -> Result<i64> {
        (**self).get_i64(index)
    }

    fn get_f64(&self, index: usize) -> Result<f64> {
        (**self).get_f64(index)
    }

    fn get_f32(&self, index: usize) -> Result<f32> {
        (**self).get_f32(index)
    }

    fn get_bool(&self, index: usize) -> Result<bool> {
        (**self).get_bool(index)
    }

    fn get_string(&self, index: usize) -> Result<String> {
        (**self).get_string(index)
    }
}

/// Binds `value` at `position`, dispatching on the value's kind.
///
/// When `ty` is given, the value must be of that kind (or `Null`).
pub fn bind<B: Bind + ?Sized>(
    slot: &mut B,
    position: usize,
    value: &Value,
    ty: Option<Type>,
) -> Result<()> {
    if let (Some(expected), Some(actual)) = (ty, value.ty()) {
        if expected != actual {
            return Err(Error::unsupported_kind(format!(
                "cannot bind {:?} to {:?} parameter {}",
                actual, expected, position
            )));
        }
    }

    match value {
        Value::Null => slot.bind_null(position),
        Value::I32(v) => slot.bind_i32(position, *v),
        Value::I64(v) => slot.bind_i64(position, *v),
        Value::F64(v) => slot.bind_f64(position, *v),
        Value::F32(v) => slot.bind_f32(position, *v),
        Value::Bool(v) => slot.bind_bool(position, *v),
        Value::String(v) => slot.bind_string(position, v),
    }
}

/// Reads column `index` of the current row as `ty`. SQL NULL reads as
/// [`Value::Null`] regardless of the declared kind.
pub fn read<R: ColumnReader + ?Sized>(row: &R, index: usize, ty: Type) -> Result<Value> {
    if row.is_null(index)? {
        return Ok(Value::Null);
    }

    Ok(match ty {
        Type::I32 => Value::I32(row.get_i32(index)?),
        Type::I64 => Value::I64(row.get_i64(index)?),
        Type::F64 => Value::F64(row.get_f64(index)?),
        Type::F32 => Value::F32(row.get_f32(index)?),
        Type::Bool => Value::Bool(row.get_bool(index)?),
        Type::String => Value::String(row.get_string(index)?),
    })
}
