//! Configuration loading and radio directory resolution
//!
//! Configuration is a single optional TOML file. Every field has a built-in
//! default, so a missing file never prevents a run.
//!
//! # Config file discovery
//!
//! 1. Explicit path from the command line (must exist)
//! 2. `RADIOCHECK_CONFIG` environment variable (must exist)
//! 3. `<user config dir>/radiocheck/config.toml`
//! 4. `/etc/radiocheck/config.toml`
//! 5. Built-in defaults
//!
//! # Example
//!
//! ```toml
//! radio_dir = "/var/lib/mpd/music/RADIO"
//!
//! [probe]
//! mpd_host = "moode.local"
//! settle_delay_ms = 800
//! volume_helper = ""      # empty: mute with `mpc volume 0` instead
//!
//! [logging]
//! level = "info"
//! ```

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "RADIOCHECK_CONFIG";

/// Environment variable overriding the `RADIO` sentinel directory
pub const RADIO_DIR_ENV_VAR: &str = "RADIOCHECK_RADIO_DIR";

/// Directory the `RADIO` sentinel maps to when nothing overrides it (moOde layout)
pub const DEFAULT_RADIO_DIR: &str = "/var/lib/mpd/music/RADIO";

/// System-wide config file location
const SYSTEM_CONFIG_FILE: &str = "/etc/radiocheck/config.toml";

/// Top-level configuration file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Directory scanned for the `RADIO` sentinel
    #[serde(default)]
    pub radio_dir: Option<PathBuf>,

    /// External programs and timing used by the playback probe
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Playback probe configuration
///
/// Names the external collaborators (mpc, pgrep, volume helper, file) and the
/// delay between starting playback and reading the daemon status.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    /// mpd control client
    #[serde(default = "default_mpc_binary")]
    pub mpc_binary: String,

    /// Passed to mpc as `--host=<host>` when set
    #[serde(default)]
    pub mpd_host: Option<String>,

    /// Passed to mpc as `--port=<port>` when set
    #[serde(default)]
    pub mpd_port: Option<u16>,

    /// Process lookup tool used to confirm the daemon is running
    #[serde(default = "default_pgrep_binary")]
    pub pgrep_binary: String,

    /// User the daemon runs as (`pgrep -u <daemon_user>`)
    #[serde(default = "default_daemon_user")]
    pub daemon_user: String,

    /// Volume helper invoked as `<helper> 0`; empty falls back to `mpc volume 0`
    #[serde(default = "default_volume_helper")]
    pub volume_helper: Option<PathBuf>,

    /// File-type detector
    #[serde(default = "default_file_binary")]
    pub file_binary: String,

    /// Wait between `mpc play` and `mpc status`
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Send child stdout/stderr to the null device unless captured
    #[serde(default = "default_suppress_child_output")]
    pub suppress_child_output: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_mpc_binary() -> String {
    "mpc".to_string()
}

fn default_pgrep_binary() -> String {
    "pgrep".to_string()
}

fn default_daemon_user() -> String {
    "mpd".to_string()
}

fn default_volume_helper() -> Option<PathBuf> {
    Some(PathBuf::from("/var/www/vol.sh"))
}

fn default_file_binary() -> String {
    "file".to_string()
}

fn default_settle_delay_ms() -> u64 {
    500
}

fn default_suppress_child_output() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            mpc_binary: default_mpc_binary(),
            mpd_host: None,
            mpd_port: None,
            pgrep_binary: default_pgrep_binary(),
            daemon_user: default_daemon_user(),
            volume_helper: default_volume_helper(),
            file_binary: default_file_binary(),
            settle_delay_ms: default_settle_delay_ms(),
            suppress_child_output: default_suppress_child_output(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl ProbeConfig {
    /// Settle delay as Duration
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Configured volume helper, treating an empty path as "none"
    pub fn volume_helper(&self) -> Option<&Path> {
        self.volume_helper
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}

impl TomlConfig {
    /// Load and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::TomlParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Locate and load the config file, falling back to defaults
    ///
    /// Returns the parsed configuration and the file it came from, if any.
    /// An explicit path (argument or `RADIOCHECK_CONFIG`) that does not exist
    /// is an error; the implicit locations are simply skipped.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            let config = Self::load(&path)?;
            return Ok((config, Some(path)));
        }

        for candidate in implicit_config_files() {
            if candidate.is_file() {
                debug!("Loading configuration from {}", candidate.display());
                let config = Self::load(&candidate)?;
                return Ok((config, Some(candidate)));
            }
        }

        debug!("No configuration file found, using built-in defaults");
        Ok((Self::default(), None))
    }
}

/// Implicit config file locations, highest priority first
fn implicit_config_files() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    match dirs::config_dir() {
        Some(dir) => candidates.push(dir.join("radiocheck").join("config.toml")),
        None => warn!("Could not determine user config directory"),
    }
    candidates.push(PathBuf::from(SYSTEM_CONFIG_FILE));
    candidates
}

/// Resolve the directory behind the `RADIO` sentinel
///
/// Priority order:
/// 1. Command-line argument (highest priority)
/// 2. `RADIOCHECK_RADIO_DIR` environment variable
/// 3. `radio_dir` from the TOML config
/// 4. Compiled default
pub fn resolve_radio_dir(cli_arg: Option<&Path>, config: &TomlConfig) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Some(path) = std::env::var_os(RADIO_DIR_ENV_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Some(path) = &config.radio_dir {
        return path.clone();
    }

    PathBuf::from(DEFAULT_RADIO_DIR)
}
