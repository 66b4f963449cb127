use super::{Fragment, Statement};
use crate::{schema::Table, Error, Result};

/// `UPDATE ... SET` with a caller-supplied assignment list.
#[derive(Debug, Clone)]
pub struct Update<'a> {
    pub table: &'a Table,
    pub assignments: Fragment,
    pub filter: Option<Fragment>,
}

impl<'a> Update<'a> {
    pub fn new(table: &'a Table, assignments: impl Into<Fragment>) -> Update<'a> {
        Update {
            table,
            assignments: assignments.into(),
            filter: None,
        }
    }

    pub fn filter(mut self, condition: impl Into<Fragment>) -> Update<'a> {
        self.filter = Some(condition.into()).filter(|f| !f.is_empty());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.assignments.is_empty() {
            return Err(Error::invalid_statement(format!(
                "update of `{}` has no assignments",
                self.table.name
            )));
        }

        self.assignments.validate()?;

        if let Some(filter) = &self.filter {
            filter.validate()?;
        }

        Ok(())
    }
}

impl<'a> From<Update<'a>> for Statement<'a> {
    fn from(value: Update<'a>) -> Self {
        Statement::Update(value)
    }
}
