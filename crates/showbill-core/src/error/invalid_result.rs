use super::Error;

/// Error when a query result has an unexpected structure.
///
/// The database returned valid data, but its shape doesn't match what the
/// operation expected (e.g. an affected-row count where rows were expected).
#[derive(Debug)]
pub(super) struct InvalidResultError {
    message: Box<str>,
}

impl std::error::Error for InvalidResultError {}

impl core::fmt::Display for InvalidResultError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid result: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid result error.
    pub fn invalid_result(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidResult(InvalidResultError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid result error.
    pub fn is_invalid_result(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidResult(_))
    }
}
