//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use textlens_engine::TextStatistics;

/// Plain text formatter - one summary block per source
pub struct TextFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_stats(&mut self, source: &str, stats: &TextStatistics) -> Result<()> {
        if self.written > 0 {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "== {source} ==")?;
        writeln!(self.writer, "{stats}")?;
        if !stats.keywords().is_empty() {
            let keywords: Vec<&str> = stats.keywords().iter().map(|k| k.word.as_str()).collect();
            writeln!(self.writer, "  keywords:     {}", keywords.join(", "))?;
        }
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
