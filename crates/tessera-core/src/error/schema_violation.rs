use super::Error;

/// Error when an operator does not fit the table it targets.
///
/// This occurs when:
/// - A CREATE TABLE is rendered for a table without a primary key column
/// - A JOIN projects no columns from either side
/// - An INSERT row has a different arity than the table
/// - An INSERT binds NULL into a non-nullable column
///
/// These errors are raised while rendering, before anything reaches the driver.
#[derive(Debug)]
pub(super) struct SchemaViolation {
    message: Box<str>,
}

impl std::error::Error for SchemaViolation {}

impl core::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "schema violation: {}", self.message)
    }
}

impl Error {
    /// Creates a schema violation error.
    pub fn schema_violation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaViolation(SchemaViolation {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a schema violation.
    pub fn is_schema_violation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SchemaViolation(_))
    }
}
