use super::Value;
use crate::{Error, Result};

use std::ops::Deref;

/// One decoded row: values in column order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRecord {
    fields: Vec<Value>,
}

impl ValueRecord {
    pub fn from_vec(fields: Vec<Value>) -> ValueRecord {
        ValueRecord { fields }
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.fields
    }

    /// Converts the value at `index` into `T`.
    pub fn get<T>(&self, index: usize) -> Result<T>
    where
        T: TryFrom<Value, Error = Error>,
    {
        T::try_from(self.field(index)?.clone())
    }

    /// Like [`get`](Self::get), mapping `Null` to `None`.
    pub fn get_opt<T>(&self, index: usize) -> Result<Option<T>>
    where
        T: TryFrom<Value, Error = Error>,
    {
        match self.field(index)? {
            Value::Null => Ok(None),
            value => T::try_from(value.clone()).map(Some),
        }
    }

    fn field(&self, index: usize) -> Result<&Value> {
        self.fields.get(index).ok_or_else(|| {
            Error::invalid_result(format!(
                "record has {} fields; index={}",
                self.fields.len(),
                index
            ))
        })
    }
}

impl Deref for ValueRecord {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.fields
    }
}

impl From<Vec<Value>> for ValueRecord {
    fn from(fields: Vec<Value>) -> ValueRecord {
        ValueRecord { fields }
    }
}

impl IntoIterator for ValueRecord {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
