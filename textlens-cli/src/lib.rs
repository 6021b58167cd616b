//! Textlens CLI library
//!
//! This library provides the command-line interface for the textlens
//! text analytics engine.

use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

/// Text analytics from the command line
#[derive(Debug, Parser)]
#[command(name = "textlens", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: commands::Commands,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, value_name = "FILE", env = "TEXTLENS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress logs and progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Run the selected command
    pub fn run(self) -> CliResult<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = config::CliConfig::load(self.config.as_deref())?;
        self.command.execute(&config, self.quiet)
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}
