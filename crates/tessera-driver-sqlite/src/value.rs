use rusqlite::types::{Null, ValueRef};
use tessera_core::{
    driver::{Bind, ColumnReader, Cursor},
    Error, Result,
};

/// Parameter slots of a prepared statement.
pub(crate) struct Slots<'a, 'c>(pub(crate) &'a mut rusqlite::Statement<'c>);

impl Slots<'_, '_> {
    fn raw_bind(&mut self, position: usize, value: impl rusqlite::ToSql) -> Result<()> {
        self.0
            .raw_bind_parameter(position, value)
            .map_err(Error::driver_operation_failed)
    }
}

impl Bind for Slots<'_, '_> {
    fn bind_i32(&mut self, position: usize, value: i32) -> Result<()> {
        self.raw_bind(position, value)
    }

    fn bind_i64(&mut self, position: usize, value: i64) -> Result<()> {
        self.raw_bind(position, value)
    }

    fn bind_f64(&mut self, position: usize, value: f64) -> Result<()> {
        self.raw_bind(position, value)
    }

    fn bind_f32(&mut self, position: usize, value: f32) -> Result<()> {
        self.raw_bind(position, f64::from(value))
    }

    fn bind_bool(&mut self, position: usize, value: bool) -> Result<()> {
        self.raw_bind(position, value)
    }

    fn bind_string(&mut self, position: usize, value: &str) -> Result<()> {
        self.raw_bind(position, value)
    }

    fn bind_null(&mut self, position: usize) -> Result<()> {
        self.raw_bind(position, Null)
    }
}

/// Row iterator over a running query.
pub(crate) struct SqliteCursor<'s> {
    rows: rusqlite::Rows<'s>,
    fetched: usize,
}

impl<'s> SqliteCursor<'s> {
    pub(crate) fn new(rows: rusqlite::Rows<'s>) -> SqliteCursor<'s> {
        SqliteCursor { rows, fetched: 0 }
    }
}

impl<'s> Cursor for SqliteCursor<'s> {
    type Row<'r>
        = SqliteRow<'r, 's>
    where
        Self: 'r;

    fn next_row(&mut self) -> Result<Option<SqliteRow<'_, 's>>> {
        let Some(row) = self.rows.next().map_err(Error::driver_operation_failed)? else {
            return Ok(None);
        };

        self.fetched += 1;
        tracing::trace!(row = self.fetched, "fetched row");

        Ok(Some(SqliteRow(row)))
    }
}

/// The row a [`SqliteCursor`] is positioned at.
///
/// SQLite stores values by storage class rather than declared type, so every
/// getter checks the storage class and refuses to convert between them.
pub(crate) struct SqliteRow<'r, 's>(&'r rusqlite::Row<'s>);

impl SqliteRow<'_, '_> {
    fn value_ref(&self, index: usize) -> Result<ValueRef<'_>> {
        self.0
            .get_ref(index - 1)
            .map_err(Error::driver_operation_failed)
    }

    fn integer(&self, index: usize, kind: &str) -> Result<i64> {
        match self.value_ref(index)? {
            ValueRef::Integer(value) => Ok(value),
            other => Err(mismatch(index, other, kind)),
        }
    }

    fn real(&self, index: usize, kind: &str) -> Result<f64> {
        match self.value_ref(index)? {
            ValueRef::Real(value) => Ok(value),
            other => Err(mismatch(index, other, kind)),
        }
    }
}

impl ColumnReader for SqliteRow<'_, '_> {
    fn is_null(&self, index: usize) -> Result<bool> {
        Ok(matches!(self.value_ref(index)?, ValueRef::Null))
    }

    fn get_i32(&self, index: usize) -> Result<i32> {
        let value = self.integer(index, "I32")?;
        i32::try_from(value).map_err(|_| {
            Error::unsupported_kind(format!(
                "column {index} holds {value}, which is out of range for I32"
            ))
        })
    }

    fn get_i64(&self, index: usize) -> Result<i64> {
        self.integer(index, "I64")
    }

    fn get_f64(&self, index: usize) -> Result<f64> {
        self.real(index, "F64")
    }

    fn get_f32(&self, index: usize) -> Result<f32> {
        // SQLite only stores doubles; only exactly representable ones narrow
        let value = self.real(index, "F32")?;
        let narrowed = value as f32;

        if value.is_nan() || f64::from(narrowed) == value {
            Ok(narrowed)
        } else {
            Err(Error::unsupported_kind(format!(
                "column {index} holds {value}, which is not representable as F32"
            )))
        }
    }

    fn get_bool(&self, index: usize) -> Result<bool> {
        match self.integer(index, "Bool")? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(Error::unsupported_kind(format!(
                "column {index} holds {value}, which is not a Bool"
            ))),
        }
    }

    fn get_string(&self, index: usize) -> Result<String> {
        match self.value_ref(index)? {
            ValueRef::Text(bytes) => std::str::from_utf8(bytes)
                .map(str::to_string)
                .map_err(Error::driver_operation_failed),
            other => Err(mismatch(index, other, "String")),
        }
    }
}

fn mismatch(index: usize, value: ValueRef<'_>, kind: &str) -> Error {
    Error::unsupported_kind(format!(
        "column {} holds {} and cannot be read as {}",
        index,
        value.data_type(),
        kind
    ))
}
