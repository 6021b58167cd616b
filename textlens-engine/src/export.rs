//! Export of the analysis summary
//!
//! The summary lists the analyzer name, how many texts were analyzed and the
//! 50-character prefix recorded for each of them.

use crate::error::{EngineError, Result};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON object
    Json,
    /// CSV with one row per analyzed text
    Csv,
}

impl ExportFormat {
    /// Lower-case format name
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(EngineError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the engine's counters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSummary {
    /// Engine name
    pub analyzer_name: String,
    /// Number of computed (non-cached) analyses
    pub total_analyses: usize,
    /// Prefixes of analyzed texts, oldest first
    pub texts_analyzed: Vec<String>,
}

impl ExportSummary {
    /// Write the summary in `format`
    pub fn write_to<W: Write>(&self, format: ExportFormat, mut writer: W) -> Result<()> {
        match format {
            ExportFormat::Json => self.write_json(&mut writer)?,
            ExportFormat::Csv => self.write_csv(&mut writer)?,
        }
        writer.flush()?;
        Ok(())
    }

    fn write_json<W: Write>(&self, writer: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_csv<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "Analyzer,TotalAnalyses,Text")?;
        let name = csv_field(&self.analyzer_name);
        for text in &self.texts_analyzed {
            writeln!(
                writer,
                "{},{},{}",
                name,
                self.total_analyses,
                csv_field(text)
            )?;
        }
        Ok(())
    }
}

/// Quote a CSV field when it contains a separator, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
