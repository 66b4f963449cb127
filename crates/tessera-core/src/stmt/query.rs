use super::{Direction, Fragment, Statement};
use crate::{schema::Table, Result};

/// `SELECT *` from a single table.
///
/// The projection is always `*`; the table's columns determine how rows are
/// decoded.
#[derive(Debug, Clone)]
pub struct Query<'a> {
    pub table: &'a Table,
    pub filter: Option<Fragment>,
    pub group_by: Option<String>,
    pub order_by: Option<String>,
    pub direction: Option<Direction>,
}

impl<'a> Query<'a> {
    pub fn new(table: &'a Table) -> Query<'a> {
        Query {
            table,
            filter: None,
            group_by: None,
            order_by: None,
            direction: None,
        }
    }

    /// Sets the WHERE condition. A blank condition clears it.
    pub fn filter(mut self, condition: impl Into<Fragment>) -> Query<'a> {
        self.filter = Some(condition.into()).filter(|f| !f.is_empty());
        self
    }

    pub fn group_by(mut self, column: impl Into<String>) -> Query<'a> {
        self.group_by = non_blank(column.into());
        self
    }

    pub fn order_by(mut self, column: impl Into<String>) -> Query<'a> {
        self.order_by = non_blank(column.into());
        self
    }

    pub fn asc(mut self) -> Query<'a> {
        self.direction = Some(Direction::Asc);
        self
    }

    pub fn desc(mut self) -> Query<'a> {
        self.direction = Some(Direction::Desc);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(filter) = &self.filter {
            filter.validate()?;
        }

        Ok(())
    }
}

pub(super) fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl<'a> From<Query<'a>> for Statement<'a> {
    fn from(value: Query<'a>) -> Self {
        Statement::Query(value)
    }
}
