//! Layered error types
//!
//! Core validation failures bubble up unchanged inside [`EngineError::Core`];
//! everything the engine adds on top (input checks, export, concurrency)
//! gets its own variant.

use crate::events::ObserverError;
use textlens_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Empty or whitespace-only input
    #[error("input text is empty")]
    EmptyInput,

    /// Unknown export format
    #[error("unsupported export format '{format}' (expected json or csv)")]
    UnsupportedFormat {
        /// The format that was requested
        format: String,
    },

    /// Core algorithm error, including record validation
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An observer rejected an event
    #[error("observer failed: {0}")]
    Observer(#[from] ObserverError),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Worker pool could not be built
    #[error("thread pool error: {0}")]
    ThreadPool(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EngineError {
    /// Whether this error is a failed record validation
    pub fn is_validation(&self) -> bool {
        matches!(self, EngineError::Core(CoreError::Validation { .. }))
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
