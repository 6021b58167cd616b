//! Analyze command implementation

use crate::{
    commands::build_analyzer,
    config::CliConfig,
    error::CliError,
    input::{read_sources, resolve_patterns},
    output::OutputFormat,
    progress::ProgressReporter,
};
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;
use textlens_engine::{TextAnalyzer, TextStatistics};

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Analyze files on a worker pool
    #[arg(short, long, conflicts_with = "cooperative")]
    pub parallel: bool,

    /// Worker threads for --parallel (default: from config)
    #[arg(short, long, value_name = "N")]
    pub workers: Option<usize>,

    /// Analyze files as cooperative async tasks
    #[arg(long = "async")]
    pub cooperative: bool,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self, config: &CliConfig, quiet: bool) -> Result<()> {
        log::info!("Starting text analysis");

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.default_format).ok_or_else(|| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.default_format
                ))
            })?,
        };

        let files = resolve_patterns(&self.input)?;
        let sources = read_sources(&files)?;
        if let Some(empty) = sources.iter().find(|s| s.text.trim().is_empty()) {
            return Err(CliError::AnalysisError(format!("{} is empty", empty.name())).into());
        }

        let analyzer = build_analyzer(config, self.workers)?;
        let progress = Arc::new(ProgressReporter::new(sources.len() as u64, quiet));
        analyzer.attach(progress.clone());

        let texts: Vec<&str> = sources.iter().map(|s| s.text.as_str()).collect();
        let results = self.run_batch(&analyzer, &texts)?;
        progress.finish();

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };
        let mut formatter = format.formatter(writer, config.output.pretty_json);
        for (source, stats) in sources.iter().zip(&results) {
            formatter.format_stats(&source.name(), stats)?;
        }
        formatter.finish()?;

        log::info!(
            "Analyzed {} files ({} computed, {} cached)",
            sources.len(),
            analyzer.analysis_count(),
            sources.len().saturating_sub(analyzer.analysis_count())
        );
        Ok(())
    }

    fn run_batch(&self, analyzer: &TextAnalyzer, texts: &[&str]) -> Result<Vec<TextStatistics>> {
        let results = if self.cooperative {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .context("Failed to start async runtime")?;
            runtime.block_on(analyzer.async_analyze(texts))
        } else if self.parallel {
            log::debug!("Batch mode: {}", analyzer.batch_mode().as_str());
            analyzer.parallel_analyze(texts, self.workers.unwrap_or(0))
        } else {
            texts.iter().map(|text| analyzer.analyze(text)).collect()
        };

        results.context("Analysis failed")
    }
}
