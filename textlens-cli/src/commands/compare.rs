//! Compare command implementation

use crate::{commands::build_analyzer, config::CliConfig, input::FileReader, output::OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use textlens_engine::Comparison;

/// Arguments for the compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// First file
    #[arg(value_name = "FIRST")]
    pub first: PathBuf,

    /// Second file
    #[arg(value_name = "SECOND")]
    pub second: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct ComparisonRecord<'a> {
    first: String,
    second: String,
    #[serde(flatten)]
    comparison: &'a Comparison,
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let first = FileReader::read_text(&self.first)?;
        let second = FileReader::read_text(&self.second)?;

        let analyzer = build_analyzer(config, None)?;
        let comparison = analyzer
            .compare_texts(&first, &second)
            .context("Comparison failed")?;

        match self.format {
            OutputFormat::Text => {
                println!("similarity:       {:.3}", comparison.similarity);
                println!("word diff:        {:+}", comparison.word_diff);
                println!("sentiment diff:   {:+.2}", comparison.sentiment_diff);
                println!("readability diff: {:+.2}", comparison.readability_diff);
            }
            OutputFormat::Json => {
                let record = ComparisonRecord {
                    first: self.first.display().to_string(),
                    second: self.second.display().to_string(),
                    comparison: &comparison,
                };
                println!("{}", serde_json::to_string_pretty(&record)?);
            }
        }
        Ok(())
    }
}
