use super::Statement;
use crate::{schema::Table, Error, Result};

/// `CREATE TABLE` for a table description.
#[derive(Debug, Clone)]
pub struct CreateTable<'a> {
    pub table: &'a Table,
}

impl<'a> CreateTable<'a> {
    pub fn new(table: &'a Table) -> CreateTable<'a> {
        CreateTable { table }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.table.columns.is_empty() {
            return Err(Error::schema_violation(format!(
                "table `{}` has no columns",
                self.table.name
            )));
        }

        if self.table.primary_key().is_none() {
            return Err(Error::schema_violation(format!(
                "table `{}` has no primary key column",
                self.table.name
            )));
        }

        Ok(())
    }
}

impl<'a> From<CreateTable<'a>> for Statement<'a> {
    fn from(value: CreateTable<'a>) -> Self {
        Statement::CreateTable(value)
    }
}
