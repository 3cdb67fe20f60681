//! Validation error types

use thiserror::Error;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field absent from the request
    #[error("{field} is required")]
    Missing { field: &'static str },

    /// Integer does not fit the column
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    /// Field has the wrong shape (e.g. a string where a number belongs)
    #[error("{field}: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::OutOfRange {
            field: "difficulty",
            min: 1,
            max: 5,
            value: 9,
        };
        assert_eq!(err.to_string(), "difficulty must be between 1 and 5, got 9");

        let err = ValidationError::Missing { field: "answer" };
        assert_eq!(err.to_string(), "answer is required");
    }
}
