//! Error types for loading a field configuration.
//!
//! The simulation itself never fails; only reading a config file can.

use thiserror::Error;

/// Errors that can occur while loading or validating a [`crate::config::Config`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML or has mistyped fields.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config parsed but holds values the simulation cannot use.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
