//! Configuration error types.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(std::path::PathBuf),

    /// Invalid TOML syntax.
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// Configuration could not be serialized.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
