use super::Error;

/// Error when a value or column type falls outside the supported primitive kinds.
///
/// This occurs when:
/// - A bound value's kind differs from the kind declared for its slot
/// - A stored value cannot be read back as the column's declared kind
/// - A SQL type name does not map to any primitive kind
#[derive(Debug)]
pub(super) struct UnsupportedKind {
    message: Box<str>,
}

impl std::error::Error for UnsupportedKind {}

impl core::fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported value kind: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported kind error.
    pub fn unsupported_kind(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedKind(UnsupportedKind {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported kind error.
    pub fn is_unsupported_kind(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedKind(_))
    }
}
