//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use textlens_engine::TextStatistics;

/// JSON formatter - outputs all records as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<StatsRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct StatsRecord {
    /// Where the text came from
    pub source: String,
    /// Analysis result
    pub statistics: TextStatistics,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_stats(&mut self, source: &str, stats: &TextStatistics) -> Result<()> {
        self.records.push(StatsRecord {
            source: source.to_string(),
            statistics: stats.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
