//! Tagscribe CLI - Render changelog entries from classified commits.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Logs go to stderr; stdout carries only rendered output
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}
