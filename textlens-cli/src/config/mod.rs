//! Configuration module
//!
//! An optional TOML file fills in engine and output settings. Every key is
//! optional; missing keys keep their defaults.

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use textlens_engine::{EngineConfig, RetryPolicy};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Engine configuration
    #[serde(default)]
    pub engine: EngineSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

impl CliConfig {
    /// Load the configuration from `path`, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(e.to_string()))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// Engine-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EngineSection {
    /// Analyzer name
    pub name: String,

    /// Maximum cached results
    pub cache_capacity: usize,

    /// Worker threads for parallel batches
    pub max_workers: usize,

    /// Simulated latency per cooperative unit (milliseconds)
    pub async_latency_ms: u64,

    /// Lowercase text before analysis
    pub lowercase: bool,

    /// Strip special characters before analysis
    pub remove_special: bool,

    /// Attempts for export writes
    pub retry_attempts: u32,

    /// Delay between export attempts (milliseconds)
    pub retry_delay_ms: u64,
}

impl Default for EngineSection {
    fn default() -> Self {
        let engine = EngineConfig::default();
        Self {
            name: engine.name,
            cache_capacity: engine.cache_capacity,
            max_workers: engine.max_workers,
            async_latency_ms: engine.async_latency.as_millis() as u64,
            lowercase: engine.lowercase,
            remove_special: engine.remove_special,
            retry_attempts: engine.retry.max_attempts,
            retry_delay_ms: engine.retry.delay.as_millis() as u64,
        }
    }
}

impl EngineSection {
    /// Convert to the engine configuration
    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig {
            name: self.name.clone(),
            cache_capacity: self.cache_capacity,
            max_workers: self.max_workers,
            async_latency: Duration::from_millis(self.async_latency_ms),
            lowercase: self.lowercase,
            remove_special: self.remove_special,
            retry: RetryPolicy::new(self.retry_attempts, Duration::from_millis(self.retry_delay_ms)),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputSection {
    /// Default output format (`text` or `json`)
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Number of entries shown by `ngrams` when `--top` is omitted
    pub top: usize,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            top: 10,
        }
    }
}
