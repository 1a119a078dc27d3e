//! Unified error types for the domain layer
//!
//! The normalizer never fails; these errors cover the strict parsers that
//! callers opt into.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// "lots".parse::<FavoriteId>()
    ///     .map_err(|_| DomainError::parse("favorite id must be an integer"))?;
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("unknown stat method");
        assert_eq!(err.to_string(), "Parse error: unknown stat method");
    }
}
