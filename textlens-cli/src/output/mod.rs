//! Output formatting module

use anyhow::Result;
use std::io::Write;
use textlens_engine::TextStatistics;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output the statistics of one source
    fn format_stats(&mut self, source: &str, stats: &TextStatistics) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary per source
    Text,
    /// JSON array of statistics records
    Json,
}

impl OutputFormat {
    /// Parse a format name from the configuration file
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    /// Create a formatter writing to `writer`
    pub fn formatter<'w, W: Write + 'w>(
        self,
        writer: W,
        pretty_json: bool,
    ) -> Box<dyn OutputFormatter + 'w> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        }
    }
}
