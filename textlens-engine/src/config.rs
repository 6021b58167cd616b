//! Configuration types for the engine

use crate::error::{EngineError, Result};
use crate::retry::RetryPolicy;
use std::time::Duration;

/// Longest accepted analyzer name, in characters
pub const MAX_NAME_CHARS: usize = 100;

/// Default analyzer name
pub const DEFAULT_NAME: &str = "Main Analyzer";

/// Engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Analyzer name, 1 to 100 characters
    pub name: String,
    /// Maximum cached results (0 disables caching)
    pub cache_capacity: usize,
    /// Worker threads for parallel batches
    pub max_workers: usize,
    /// Simulated I/O latency of each cooperative batch unit
    pub async_latency: Duration,
    /// Lowercase text before analysis
    pub lowercase: bool,
    /// Strip characters outside word characters, whitespace and `.!?,;-`
    pub remove_special: bool,
    /// Retry policy for export I/O
    pub retry: RetryPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            cache_capacity: 50,
            max_workers: 4,
            async_latency: Duration::from_millis(100),
            lowercase: true,
            remove_special: false,
            retry: RetryPolicy::none(),
        }
    }
}

impl EngineConfig {
    /// Configuration without result caching
    pub fn uncached() -> Self {
        Self {
            cache_capacity: 0,
            ..Default::default()
        }
    }

    /// Configuration tuned for throughput: one worker per core, no simulated latency
    pub fn fast() -> Self {
        Self {
            max_workers: num_cpus::get().max(1),
            async_latency: Duration::ZERO,
            cache_capacity: 256,
            ..Default::default()
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;

        if self.max_workers == 0 {
            return Err(EngineError::ConfigError(
                "max_workers must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Check an analyzer name: non-empty and at most [`MAX_NAME_CHARS`] characters
pub fn validate_name(name: &str) -> Result<()> {
    let chars = name.chars().count();
    if chars == 0 || chars > MAX_NAME_CHARS {
        return Err(textlens_core::CoreError::Validation {
            field: "name",
            reason: format!("length must be between 1 and {MAX_NAME_CHARS}, got {chars}"),
        }
        .into());
    }
    Ok(())
}
