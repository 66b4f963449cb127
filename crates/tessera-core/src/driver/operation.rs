use crate::stmt::Statement;

#[derive(Debug, Clone)]
pub enum Operation<'a> {
    /// Render, bind and execute a statement
    Statement(Statement<'a>),

    /// Transaction control
    Transaction(Transaction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Start,
    Commit,
    Rollback,
}

impl<'a> From<Statement<'a>> for Operation<'a> {
    fn from(value: Statement<'a>) -> Self {
        Operation::Statement(value)
    }
}

impl From<Transaction> for Operation<'_> {
    fn from(value: Transaction) -> Self {
        Operation::Transaction(value)
    }
}
