//! Error types for graphfeed queries.

use thiserror::Error;

/// Result type alias for graphfeed operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for graphfeed query operations.
///
/// Every failure names the constraint it violated; a query either returns its
/// full result or one of these, never a partial result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A request argument is outside its accepted range (e.g. limit above the cap).
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
    /// A referenced account or comment does not exist.
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },
    /// The index provider cannot furnish a consistent view right now.
    #[error("Index provider unavailable: {message}")]
    Unavailable { message: String },
    /// A result could not be encoded for the caller.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a not found error for a record of the given kind.
    pub fn not_found(kind: &'static str, key: impl ToString) -> Self {
        Error::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    /// Creates an account not found error.
    pub fn account_not_found(key: impl ToString) -> Self {
        Self::not_found("Account", key)
    }

    /// Creates a comment not found error.
    pub fn comment_not_found(key: impl ToString) -> Self {
        Self::not_found("Comment", key)
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Error::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Error::Serialization {
            message: message.into(),
        }
    }

    /// Returns true if this is an `InvalidArgument` error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    /// Returns true if this is a `NotFound` error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Returns true if this is an `Unavailable` error.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Error::Unavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("cannot retrieve more than 500 feed entries at a time");
        assert!(err.to_string().contains("500"));

        let err = Error::account_not_found("alice");
        assert_eq!(err.to_string(), "Account not found: alice");

        let err = Error::comment_not_found(42);
        assert!(err.to_string().contains("42"));

        let err = Error::unavailable("store closed");
        assert!(err.to_string().contains("store closed"));
    }

    #[test]
    fn test_error_predicates() {
        assert!(Error::invalid_argument("x").is_invalid_argument());
        assert!(Error::account_not_found("x").is_not_found());
        assert!(Error::unavailable("x").is_unavailable());
        assert!(!Error::unavailable("x").is_not_found());
    }

    #[test]
    fn test_not_found_kind() {
        match Error::comment_not_found(7) {
            Error::NotFound { kind, key } => {
                assert_eq!(kind, "Comment");
                assert_eq!(key, "7");
            }
            _ => panic!("Wrong error type"),
        }
    }
}
