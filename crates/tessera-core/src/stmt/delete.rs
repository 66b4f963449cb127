use super::{Fragment, Statement};
use crate::{schema::Table, Result};

/// `DELETE FROM`, optionally filtered.
#[derive(Debug, Clone)]
pub struct Delete<'a> {
    pub table: &'a Table,
    pub filter: Option<Fragment>,
}

impl<'a> Delete<'a> {
    pub fn new(table: &'a Table) -> Delete<'a> {
        Delete {
            table,
            filter: None,
        }
    }

    pub fn filter(mut self, condition: impl Into<Fragment>) -> Delete<'a> {
        self.filter = Some(condition.into()).filter(|f| !f.is_empty());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match &self.filter {
            Some(filter) => filter.validate(),
            None => Ok(()),
        }
    }
}

impl<'a> From<Delete<'a>> for Statement<'a> {
    fn from(value: Delete<'a>) -> Self {
        Statement::Delete(value)
    }
}
