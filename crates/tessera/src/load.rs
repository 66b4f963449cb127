use crate::{Error, Result, Value, ValueRecord};

/// Builds a record from one decoded row.
pub trait Load: Sized {
    fn load(record: ValueRecord) -> Result<Self>;
}

/// A single column value converted into a Rust type.
///
/// `Option<T>` maps SQL NULL to `None`; every other implementation rejects NULL.
pub trait Field: Sized {
    fn from_value(value: Value) -> Result<Self>;
}

impl Load for ValueRecord {
    fn load(record: ValueRecord) -> Result<Self> {
        Ok(record)
    }
}

impl Load for Vec<Value> {
    fn load(record: ValueRecord) -> Result<Self> {
        Ok(record.into_vec())
    }
}

macro_rules! impl_field {
    ( $( $ty:ty ),* ) => {
        $(
            impl Field for $ty {
                fn from_value(value: Value) -> Result<Self> {
                    <$ty>::try_from(value)
                }
            }
        )*
    };
}

impl_field!(i32, i64, f64, f32, bool, String);

impl Field for Value {
    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl<T: Field> Field for Option<T> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value).map(Some),
        }
    }
}

macro_rules! impl_load_for_tuple {
    ( $len:literal => $( $name:ident ),+ ) => {
        impl<$( $name: Field ),+> Load for ( $( $name, )+ ) {
            fn load(record: ValueRecord) -> Result<Self> {
                if record.len() != $len {
                    return Err(Error::invalid_result(format!(
                        "expected {} fields, record has {}",
                        $len,
                        record.len()
                    )));
                }

                let mut fields = record.into_iter();
                Ok(( $(
                    $name::from_value(fields.next().unwrap_or_default())?,
                )+ ))
            }
        }
    };
}

impl_load_for_tuple!(1 => T1);
impl_load_for_tuple!(2 => T1, T2);
impl_load_for_tuple!(3 => T1, T2, T3);
impl_load_for_tuple!(4 => T1, T2, T3, T4);
impl_load_for_tuple!(5 => T1, T2, T3, T4, T5);
impl_load_for_tuple!(6 => T1, T2, T3, T4, T5, T6);
impl_load_for_tuple!(7 => T1, T2, T3, T4, T5, T6, T7);
impl_load_for_tuple!(8 => T1, T2, T3, T4, T5, T6, T7, T8);
