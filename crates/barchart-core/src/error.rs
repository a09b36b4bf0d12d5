//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The upper bound of a sample range does not exceed the lower bound.
    #[error("invalid range: upper bound {upper} must be greater than lower bound {lower}")]
    InvalidRange {
        /// The requested inclusive lower bound.
        lower: u32,
        /// The requested exclusive upper bound.
        upper: u32,
    },

    /// A control value or input document failed validation.
    #[error("validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message_names_both_bounds() {
        let err = DomainError::InvalidRange {
            lower: 100,
            upper: 50,
        };
        assert_eq!(
            err.to_string(),
            "invalid range: upper bound 50 must be greater than lower bound 100"
        );
    }

    #[test]
    fn test_validation_message_is_prefixed() {
        let err = DomainError::Validation("seed must be between 1 and 1000".into());
        assert_eq!(
            err.to_string(),
            "validation error: seed must be between 1 and 1000"
        );
    }
}
