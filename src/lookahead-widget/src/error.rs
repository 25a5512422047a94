//! Error types for the widget crate.
//!
//! The interaction controller itself never fails; these errors only surface
//! while loading configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading an [`AutocompleteConfig`](crate::config::AutocompleteConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has mistyped fields.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but holds an unusable value.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
