//! # radiocheck common library
//!
//! Shared code for the radiocheck tools:
//! - Error types
//! - TOML configuration loading and path resolution
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod logging;

pub use config::{LoggingConfig, ProbeConfig, TomlConfig};
pub use error::{Error, Result};
