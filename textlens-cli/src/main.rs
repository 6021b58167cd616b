//! textlens command-line entry point

use clap::Parser;
use textlens_cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
