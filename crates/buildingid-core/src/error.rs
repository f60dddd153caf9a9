//! Error types for building identifier handling
//!
//! The normalizer and the validator are total and never fail.
//! Only the typed and batch helpers return `Result<T, Error>`.

use thiserror::Error;

/// Building identifier error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A string was used as an identifier but is not in canonical form
    #[error("Invalid building identifier {identifier:?}: {reason}")]
    InvalidIdentifier { identifier: String, reason: String },

    /// Batch input could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ParseError(err.to_string())
    }
}

/// Result type alias for building identifier operations
pub type Result<T> = std::result::Result<T, Error>;
