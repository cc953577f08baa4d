//! Error types for radiocheck
//!
//! Everything here is fatal for the run. Per-item problems in a batch scan
//! (incomplete playlists, playback failures) are tallied instead.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for radiocheck
#[derive(Error, Debug)]
pub enum Error {
    /// pgrep found no process owned by the daemon user
    #[error("oops - {user} process not found")]
    DaemonNotRunning { user: String },

    /// External program could not be started or its output read
    #[error("Failed to run {program}: {reason}")]
    Command { program: String, reason: String },

    /// Argument is neither a path, the RADIO sentinel, nor an http URL
    #[error("oops - what is {0}?")]
    Unrecognized(String),

    /// File could not be read
    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the report failed
    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

/// Convenience Result type using radiocheck Error
pub type Result<T> = std::result::Result<T, Error>;
