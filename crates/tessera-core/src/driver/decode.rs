use super::{codec, ColumnReader};
use crate::{
    stmt::{Type, ValueRecord},
    Result,
};

/// A driver's row iterator over a query result.
pub trait Cursor {
    type Row<'r>: ColumnReader
    where
        Self: 'r;

    /// Advances to the next row, returning `None` once the result is exhausted.
    fn next_row(&mut self) -> Result<Option<Self::Row<'_>>>;
}

/// Drains `cursor`, decoding `tys.len()` columns from every row.
///
/// The whole result is materialized. An empty result yields an empty `Vec`.
pub fn decode_rows<C: Cursor + ?Sized>(cursor: &mut C, tys: &[Type]) -> Result<Vec<ValueRecord>> {
    let mut ret = vec![];

    while let Some(row) = cursor.next_row()? {
        let fields = tys
            .iter()
            .enumerate()
            .map(|(index, ty)| codec::read(&row, index + 1, *ty))
            .collect::<Result<Vec<_>>>()?;

        ret.push(ValueRecord::from_vec(fields));
    }

    Ok(ret)
}
