//! Configuration for Tagscribe.
//!
//! This crate owns the commit type table and the exclusion list, and loads
//! overrides from a `tagscribe.toml` file.

mod builtin;
mod error;
mod loader;
mod schema;

pub use builtin::CATCH_ALL_TYPE;
pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config, find_and_load_config_from, load_config};
pub use schema::{ChangelogConfig, TypeRule};
