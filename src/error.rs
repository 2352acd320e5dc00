use std::error::Error as StdError;

use thiserror::Error;

/// Result type for selection operations
pub type Result<T> = std::result::Result<T, SelectError>;

/// Errors that can occur while placing an order statistic.
///
/// Validation, projection and allocation failures are reported before the
/// sequence is touched. Comparison failures and invariant violations are
/// raised mid-algorithm and leave the sequence partially permuted, with every
/// element still present.
#[derive(Debug, Error)]
pub enum SelectError {
    /// The container or key array handed in cannot be used as given.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// The target index is not within `[0, len)`.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The key projection failed for the element at `index`.
    ///
    /// Keys computed before the failure are dropped and no partition ran.
    #[error("key projection failed for element {index}")]
    Projection {
        index: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// Two keys could not be ordered.
    #[error("comparison failed: {0}")]
    Comparison(String),

    /// An auxiliary buffer could not be allocated.
    #[error("failed to allocate auxiliary buffer of {requested} entries")]
    Allocation { requested: usize },

    /// The heapselect pivot's equal region does not cover the target index.
    ///
    /// This only happens with a comparator that is not a strict weak ordering.
    #[error("target index {index} outside equal region [{low}, {high}) after partition")]
    InvariantViolation { index: usize, low: usize, high: usize },

    /// Rejected tuning values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SelectError {
    pub fn comparison(msg: impl Into<String>) -> Self {
        SelectError::Comparison(msg.into())
    }

    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        SelectError::TypeMismatch(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        SelectError::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SelectError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "index 5 out of range for sequence of length 3"
        );

        let err = SelectError::comparison("values are not comparable");
        assert_eq!(err.to_string(), "comparison failed: values are not comparable");
    }

    #[test]
    fn test_projection_error_exposes_source() {
        let err = SelectError::Projection {
            index: 2,
            source: "bad element".into(),
        };
        assert_eq!(err.to_string(), "key projection failed for element 2");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("bad element"));
    }
}
