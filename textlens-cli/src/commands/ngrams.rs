//! N-gram command implementation

use crate::{commands::build_analyzer, config::CliConfig, input::FileReader, output::OutputFormat};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the ngrams command
#[derive(Debug, Args)]
pub struct NgramsArgs {
    /// Input file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Words per n-gram
    #[arg(short, default_value_t = 2)]
    pub n: usize,

    /// Number of n-grams to show (default: from config)
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct NgramRecord {
    ngram: Vec<String>,
    count: usize,
}

impl NgramsArgs {
    /// Execute the ngrams command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        if self.n == 0 {
            anyhow::bail!("n-gram size must be at least 1");
        }

        let text = FileReader::read_text(&self.input)?;
        let analyzer = build_analyzer(config, None)?;
        let top = self.top.unwrap_or(config.output.top);

        let records: Vec<NgramRecord> = analyzer
            .ngram_frequencies(&text, self.n)
            .into_iter()
            .take(top)
            .map(|(gram, count)| NgramRecord {
                ngram: gram.into_vec(),
                count,
            })
            .collect();
        log::debug!("{} {}-grams selected", records.len(), self.n);

        match self.format {
            OutputFormat::Text => {
                for record in &records {
                    println!("{}\t{}", record.count, record.ngram.join(" "));
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        }
        Ok(())
    }
}
