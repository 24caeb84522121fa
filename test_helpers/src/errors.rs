//! Error payloads for exercising error-state containers.

use thiserror::Error;

/// Comparable, cloneable error used as a container payload in tests.
///
/// # Examples
///
/// ```
/// use maybe_value_test_helpers::errors::SampleError;
///
/// let err = SampleError::new("disk full");
/// assert_eq!(err.to_string(), "sample failure: disk full");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("sample failure: {reason}")]
pub struct SampleError {
    reason: String,
}

impl SampleError {
    /// Builds an error carrying `reason`.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Text supplied at construction.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
