use super::Error;

/// Error when a statement is structurally invalid independent of the table schema.
///
/// This occurs when a bound fragment carries a different number of values than it
/// has `?` markers.
#[derive(Debug)]
pub(super) struct InvalidStatement {
    message: Box<str>,
}

impl std::error::Error for InvalidStatement {}

impl core::fmt::Display for InvalidStatement {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid statement: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid statement error.
    pub fn invalid_statement(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidStatement(InvalidStatement {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid statement error.
    pub fn is_invalid_statement(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidStatement(_))
    }
}
