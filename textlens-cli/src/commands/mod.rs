//! CLI command implementations

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Subcommand;
use textlens_engine::TextAnalyzer;

pub mod analyze;
pub mod compare;
pub mod export;
pub mod ngrams;
pub mod patterns;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze text files and print their statistics
    Analyze(analyze::AnalyzeArgs),

    /// Compare two text files
    Compare(compare::CompareArgs),

    /// List the most frequent word n-grams of a file
    Ngrams(ngrams::NgramsArgs),

    /// Print the regex matches found in a file
    Patterns(patterns::PatternsArgs),

    /// Analyze files and export the analysis summary
    Export(export::ExportArgs),
}

impl Commands {
    /// Execute the command
    pub fn execute(&self, config: &CliConfig, quiet: bool) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(config, quiet),
            Commands::Compare(args) => args.execute(config),
            Commands::Ngrams(args) => args.execute(config),
            Commands::Patterns(args) => args.execute(config),
            Commands::Export(args) => args.execute(config, quiet),
        }
    }
}

/// Build an analyzer from the configuration, optionally overriding the worker count
pub(crate) fn build_analyzer(config: &CliConfig, workers: Option<usize>) -> Result<TextAnalyzer> {
    let mut engine = config.engine.to_engine_config();
    if let Some(workers) = workers {
        engine.max_workers = workers;
    }

    TextAnalyzer::new(engine).context("Invalid engine configuration")
}
