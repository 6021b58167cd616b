//! Export command implementation

use crate::{
    commands::build_analyzer,
    config::CliConfig,
    error::CliError,
    input::{read_sources, resolve_patterns},
};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use textlens_engine::ExportFormat;

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Destination file
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Export format (json or csv)
    #[arg(long, default_value = "json")]
    pub format: String,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, config: &CliConfig, quiet: bool) -> Result<()> {
        // fail on a bad format before any analysis runs
        self.format.parse::<ExportFormat>()?;

        let files = resolve_patterns(&self.input)?;
        let sources = read_sources(&files)?;
        let analyzer = build_analyzer(config, None)?;

        for source in &sources {
            analyzer.analyze(&source.text).map_err(|e| {
                CliError::AnalysisError(format!("{}: {e}", source.name()))
            })?;
        }

        analyzer
            .export_results(&self.output, &self.format)
            .with_context(|| format!("Failed to export to {}", self.output.display()))?;

        if !quiet {
            println!(
                "Exported {} analyses to {}",
                analyzer.analysis_count(),
                self.output.display()
            );
        }
        Ok(())
    }
}
