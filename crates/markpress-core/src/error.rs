//! Error types for markpress-core

use thiserror::Error;

/// Result type alias for Markpress operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur across Markpress crates
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A value could not be parsed or deserialized
    #[error("Parse error: {0}")]
    Parse(String),

    /// An invalid argument was supplied to an operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Create a parse error from any displayable message.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Create an invalid-argument error from any displayable message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = Error::parse("bad yaml");
        assert_eq!(err.to_string(), "Parse error: bad yaml");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::invalid_argument("empty slug");
        assert_eq!(err.to_string(), "Invalid argument: empty slug");
    }
}
