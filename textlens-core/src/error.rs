//! Core error types (deterministic only)

use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A constructed value broke one of its invariants
    #[error("validation failed for `{field}`: {reason}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// A user supplied regular expression could not be compiled
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as given
        pattern: String,
        /// Compiler message
        reason: String,
    },
}

impl CoreError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        CoreError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
