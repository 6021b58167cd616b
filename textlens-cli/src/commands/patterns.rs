//! Patterns command implementation

use crate::{commands::build_analyzer, config::CliConfig, input::FileReader};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the patterns command
#[derive(Debug, Args)]
pub struct PatternsArgs {
    /// Input file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Regular expression, matched case-insensitively
    #[arg(short, long, value_name = "REGEX")]
    pub pattern: String,

    /// Print only the number of matches
    #[arg(long)]
    pub count: bool,
}

impl PatternsArgs {
    /// Execute the patterns command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let text = FileReader::read_text(&self.input)?;
        let analyzer = build_analyzer(config, None)?;
        let matches = analyzer
            .find_patterns(&text, &self.pattern)
            .with_context(|| format!("Invalid pattern: {}", self.pattern))?;

        if self.count {
            println!("{}", matches.len());
        } else {
            for found in &matches {
                println!("{found}");
            }
        }
        Ok(())
    }
}
