//! Configuration loader.

use std::path::Path;

use tracing::debug;

use crate::{ChangelogConfig, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "tagscribe.toml";

/// Loads and validates configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<ChangelogConfig> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: ChangelogConfig = toml::from_str(&content)?;
    config.validate()?;

    debug!(
        rules = config.types.len(),
        excluded = config.exclude_types.len(),
        "configuration loaded"
    );
    Ok(config)
}

/// Finds and loads configuration from the current directory or parents.
///
/// # Errors
///
/// Returns an error if no configuration file is found or it cannot be parsed.
pub fn find_and_load_config() -> ConfigResult<ChangelogConfig> {
    let current_dir = std::env::current_dir()?;
    find_and_load_config_from(&current_dir)
}

/// Finds and loads configuration starting from the given directory.
///
/// Walks up the directory tree until a configuration file is found.
///
/// # Errors
///
/// Returns an error if no configuration file is found or it cannot be parsed.
pub fn find_and_load_config_from(start_dir: impl AsRef<Path>) -> ConfigResult<ChangelogConfig> {
    let start_dir = start_dir.as_ref();

    for dir in start_dir.ancestors() {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return load_config(config_path);
        }
    }

    Err(ConfigError::NotFound(start_dir.join(CONFIG_FILE_NAME)))
}
