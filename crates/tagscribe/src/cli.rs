//! CLI definition.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tagscribe_config::{ChangelogConfig, ConfigError, find_and_load_config, load_config};
use tracing::debug;

use crate::commands;

/// Render emoji-sectioned Markdown changelog entries from classified commits.
#[derive(Debug, Parser)]
#[command(name = "tagscribe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: nearest tagscribe.toml, else built-in types; unused by `section`)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the type table in display order
    Types,

    /// Print the effective configuration as TOML
    Config,

    /// Render a single labelled section
    Section(commands::section::SectionArgs),

    /// Render a full changelog entry for a release
    Render(commands::render::RenderArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        let Self {
            config: config_path,
            command,
            ..
        } = self;
        let config_path = config_path.as_deref();

        match command {
            // Sections never consult the type table
            Commands::Section(args) => {
                commands::section::run(args);
                Ok(())
            }
            Commands::Types => {
                commands::types::run(&resolve_config(config_path)?);
                Ok(())
            }
            Commands::Config => commands::config::run(&resolve_config(config_path)?),
            Commands::Render(args) => {
                commands::render::run(args, resolve_config(config_path)?);
                Ok(())
            }
        }
    }
}

/// Loads `path` if given, else the nearest `tagscribe.toml`, else the
/// built-in table.
fn resolve_config(path: Option<&Path>) -> Result<ChangelogConfig> {
    if let Some(path) = path {
        return load_config(path).with_context(|| format!("failed to load {}", path.display()));
    }

    match find_and_load_config() {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound(_)) => {
            debug!("no configuration file found, using built-in type table");
            Ok(ChangelogConfig::default())
        }
        Err(err) => Err(err).context("failed to load configuration"),
    }
}
