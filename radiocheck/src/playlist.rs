//! Minimal `.pls` playlist parser
//!
//! Only `Title1` and `File1` are read. Everything else in the file is
//! ignored, including further numbered entries. No syntax checking is done
//! and line endings are not normalised.

use crate::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

const HEADER: &str = "[playlist]";
const URL_KEY: &str = "File1";
const NAME_KEY: &str = "Title1";

/// Station name and stream URL taken from a playlist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistRecord {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl PlaylistRecord {
    /// Both name and URL were found
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.url.is_some()
    }

    /// Name and URL, if both were found
    pub fn station(&self) -> Option<(&str, &str)> {
        Some((self.name.as_deref()?, self.url.as_deref()?))
    }
}

/// Strip the spaces and newline characters a line may carry
///
/// Deliberately narrower than `str::trim`: a `\r` left by CRLF files stays.
pub(crate) fn strip_line(line: &str) -> &str {
    line.trim_matches(|c| c == ' ' || c == '\n')
}

/// Scan playlist text for the first `Title1=` and `File1=` values
///
/// Stops reading once both are set. Lines without `=` are skipped and empty
/// values count as missing, so this only fails on I/O or invalid UTF-8.
pub fn parse_playlist<R: BufRead>(mut reader: R) -> io::Result<PlaylistRecord> {
    let mut record = PlaylistRecord::default();
    let mut buf = String::new();

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }

        let line = strip_line(&buf);
        if line.is_empty() || line == HEADER {
            continue;
        }

        // Values may contain '=' themselves
        let Some((key, value)) = line.split_once('=') else {
            tracing::trace!(line, "Skipping playlist line without '='");
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if value.is_empty() {
            continue;
        }

        match key {
            URL_KEY if record.url.is_none() => record.url = Some(value.to_string()),
            NAME_KEY if record.name.is_none() => record.name = Some(value.to_string()),
            _ => {}
        }

        if record.is_complete() {
            break;
        }
    }

    Ok(record)
}

/// Parse the playlist file at `path`
pub fn parse_playlist_file(path: &Path) -> Result<PlaylistRecord> {
    let read_error = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    parse_playlist(BufReader::new(file)).map_err(read_error)
}
