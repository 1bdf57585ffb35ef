//! Config command.

use anyhow::Result;
use tagscribe_config::ChangelogConfig;

/// Prints the effective configuration as TOML.
pub fn run(config: &ChangelogConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
