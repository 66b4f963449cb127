use super::{Statement, Value};
use crate::{schema::Table, Error, Result};

/// Multi-row `INSERT INTO ... VALUES`.
///
/// Each row holds one value per table column, in column order.
#[derive(Debug, Clone)]
pub struct Insert<'a> {
    pub table: &'a Table,
    pub rows: Vec<Vec<Value>>,
}

impl<'a> Insert<'a> {
    pub fn new(table: &'a Table) -> Insert<'a> {
        Insert {
            table,
            rows: vec![],
        }
    }

    pub fn row(mut self, values: impl IntoIterator<Item = impl Into<Value>>) -> Insert<'a> {
        self.rows.push(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn rows<I>(mut self, rows: impl IntoIterator<Item = I>) -> Insert<'a>
    where
        I: IntoIterator<Item = Value>,
    {
        self.rows
            .extend(rows.into_iter().map(|row| row.into_iter().collect()));
        self
    }

    /// Checks every row before anything is bound.
    pub(crate) fn validate(&self) -> Result<()> {
        let table = self.table;

        if self.rows.is_empty() {
            return Err(Error::schema_violation(format!(
                "insert into `{}` has no rows",
                table.name
            )));
        }

        for (index, row) in self.rows.iter().enumerate() {
            if row.len() != table.columns.len() {
                return Err(Error::schema_violation(format!(
                    "row {} has {} values but table `{}` has {} columns",
                    index,
                    row.len(),
                    table.name,
                    table.columns.len()
                )));
            }

            for (value, column) in row.iter().zip(&table.columns) {
                match value.ty() {
                    None if !column.nullable => {
                        return Err(Error::schema_violation(format!(
                            "row {} binds NULL to non-nullable column `{}`.`{}`",
                            index, table.name, column.name
                        )));
                    }
                    Some(ty) if ty != column.ty => {
                        return Err(Error::unsupported_kind(format!(
                            "row {} binds {:?} to {:?} column `{}`.`{}`",
                            index, ty, column.ty, table.name, column.name
                        )));
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }
}

impl<'a> From<Insert<'a>> for Statement<'a> {
    fn from(value: Insert<'a>) -> Self {
        Statement::Insert(value)
    }
}
