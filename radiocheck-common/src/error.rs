//! Common error types for radiocheck

use std::path::PathBuf;
use thiserror::Error;

/// Common result type for radiocheck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared across the radiocheck crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("Cannot read configuration file {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file exists but is not valid TOML for [`crate::TomlConfig`]
    #[error("Invalid configuration file {}: {source}", .path.display())]
    TomlParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
