use super::{query::non_blank, ColumnRef, Direction, Fragment, Statement, Type};
use crate::{schema::Table, Error, Result};

/// Two-table `SELECT` with an explicit projection.
///
/// Projected columns are rendered left side first, then right side, each
/// qualified by its table. The join kind (`INNER JOIN`, `LEFT JOIN`, ...) is
/// inserted verbatim.
#[derive(Debug, Clone)]
pub struct Join<'a> {
    pub left: &'a Table,
    pub right: &'a Table,
    pub kind: String,
    pub left_columns: Vec<String>,
    pub right_columns: Vec<String>,
    pub on: Option<Fragment>,
    pub filter: Option<Fragment>,
    pub group_by: Option<ColumnRef>,
    pub order_by: Option<ColumnRef>,
    pub direction: Option<Direction>,
}

impl<'a> Join<'a> {
    /// Creates an `INNER JOIN` between two tables with nothing projected yet.
    pub fn new(left: &'a Table, right: &'a Table) -> Join<'a> {
        Join {
            left,
            right,
            kind: "INNER JOIN".to_string(),
            left_columns: vec![],
            right_columns: vec![],
            on: None,
            filter: None,
            group_by: None,
            order_by: None,
            direction: None,
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Join<'a> {
        self.kind = kind.into();
        self
    }

    pub fn select_left<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Join<'a> {
        self.left_columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn select_right<S: Into<String>>(
        mut self,
        columns: impl IntoIterator<Item = S>,
    ) -> Join<'a> {
        self.right_columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn on(mut self, condition: impl Into<Fragment>) -> Join<'a> {
        self.on = Some(condition.into()).filter(|f| !f.is_empty());
        self
    }

    pub fn filter(mut self, condition: impl Into<Fragment>) -> Join<'a> {
        self.filter = Some(condition.into()).filter(|f| !f.is_empty());
        self
    }

    pub fn group_by(mut self, column: impl Into<ColumnRef>) -> Join<'a> {
        self.group_by = column_ref(column.into());
        self
    }

    pub fn order_by(mut self, column: impl Into<ColumnRef>) -> Join<'a> {
        self.order_by = column_ref(column.into());
        self
    }

    pub fn asc(mut self) -> Join<'a> {
        self.direction = Some(Direction::Asc);
        self
    }

    pub fn desc(mut self) -> Join<'a> {
        self.direction = Some(Direction::Desc);
        self
    }

    /// Kinds of the projected columns, left side first.
    pub fn returning(&self) -> Result<Vec<Type>> {
        let left = self
            .left_columns
            .iter()
            .map(|name| self.left.resolve_column(name).map(|column| column.ty));

        let right = self
            .right_columns
            .iter()
            .map(|name| self.right.resolve_column(name).map(|column| column.ty));

        left.chain(right).collect()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.left_columns.is_empty() && self.right_columns.is_empty() {
            return Err(Error::schema_violation(format!(
                "join of `{}` and `{}` projects no columns",
                self.left.name, self.right.name
            )));
        }

        self.returning()?;

        for fragment in [&self.on, &self.filter].into_iter().flatten() {
            fragment.validate()?;
        }

        Ok(())
    }
}

fn column_ref(column: ColumnRef) -> Option<ColumnRef> {
    match column {
        ColumnRef::Column(name) => non_blank(name).map(ColumnRef::Column),
        qualified => Some(qualified),
    }
}

impl<'a> From<Join<'a>> for Statement<'a> {
    fn from(value: Join<'a>) -> Self {
        Statement::Join(value)
    }
}
