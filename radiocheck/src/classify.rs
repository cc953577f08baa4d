//! Command-line target classification

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Argument naming the moOde station directory
pub const RADIO_SENTINEL: &str = "RADIO";

/// What a run should check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Every `.pls` file under this directory
    Directory(PathBuf),
    /// One playlist, or a text file with one URL per line
    File(PathBuf),
    /// A single stream URL
    Url(String),
}

impl Target {
    /// Pick the check mode for `arg`
    ///
    /// Existing paths take precedence, so a directory literally named
    /// `RADIO` in the working directory is scanned instead of `radio_dir`.
    pub fn classify(arg: &str, radio_dir: &Path) -> Result<Self> {
        let path = Path::new(arg);
        if path.is_dir() {
            Ok(Self::Directory(path.to_path_buf()))
        } else if path.is_file() {
            Ok(Self::File(path.to_path_buf()))
        } else if arg == RADIO_SENTINEL {
            Ok(Self::Directory(radio_dir.to_path_buf()))
        } else if starts_with_ignore_case(arg, "http") {
            Ok(Self::Url(arg.to_string()))
        } else {
            Err(Error::Unrecognized(arg.to_string()))
        }
    }
}

/// ASCII case-insensitive prefix test
pub(crate) fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}
