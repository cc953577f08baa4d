//! Single-file check: one playlist, or a list of URLs

use super::Checker;
use crate::classify::starts_with_ignore_case;
use crate::command::Capture;
use crate::playlist::{parse_playlist_file, strip_line};
use crate::report::{Outcome, Tally};
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::debug;

/// Scheme a stream URL must carry in single-file mode
const STREAM_SCHEME: &str = "http://";

/// Classification parsed from `file -b -- <path>` output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileType {
    pub ascii: bool,
    pub playlist: bool,
}

impl FileType {
    /// Interpret a description such as `PLS playlist, ASCII text`
    pub fn from_description(description: &str) -> Self {
        Self {
            ascii: description.contains("ASCII"),
            playlist: description.contains("PLS"),
        }
    }
}

impl Checker<'_> {
    /// Ask the file-type detector about `path`
    pub fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let path_arg = path.to_string_lossy();
        let output = self.runner.run(
            &self.config.file_binary,
            &["-b", "--", &*path_arg],
            Capture::Stdout,
        )?;
        if !output.success {
            return Err(Error::Command {
                program: self.config.file_binary.clone(),
                reason: format!("exited with {:?}", output.code),
            });
        }

        let file_type = FileType::from_description(&output.stdout);
        debug!(?file_type, "{}", output.stdout.trim_end());
        Ok(file_type)
    }

    /// Check a playlist or a URL list, depending on what `file` says it is
    pub fn check_file(&self, path: &Path, out: &mut dyn Write) -> Result<Outcome> {
        let file_type = self.detect_file_type(path)?;
        if !file_type.ascii {
            return Ok(Outcome::Failure(format!("{} not ASCII text", path.display())));
        }

        if file_type.playlist {
            self.check_playlist(path)
        } else {
            self.check_url_list(path, out)
        }
    }

    /// Probe the station of a single playlist
    ///
    /// Incomplete playlists and non-http URLs are rejected without a probe.
    pub fn check_playlist(&self, path: &Path) -> Result<Outcome> {
        let record = parse_playlist_file(path)?;
        let Some((_, url)) = record.station() else {
            return Ok(Outcome::Failure(format!(
                "oops - {} is missing File1= and/or Title1= line",
                path.display()
            )));
        };

        if !starts_with_ignore_case(url, STREAM_SCHEME) {
            return Ok(Outcome::Failure(format!(
                "{} does not describe an HTTP streaming source",
                path.display()
            )));
        }

        let result = self.prober().probe(url)?;
        if result.ok {
            Ok(Outcome::Success(format!(
                "{} is a playable pls file",
                path.display()
            )))
        } else {
            Ok(Outcome::Failure(format!("mpd: {}", result.error_message)))
        }
    }

    /// Probe every `http://` line of a text file
    ///
    /// Other lines are ignored. Returns `None` when no line qualified, in
    /// which case nothing was probed.
    pub fn scan_url_list(&self, path: &Path, out: &mut dyn Write) -> Result<Option<Tally>> {
        let read_error = |source| Error::Read {
            path: path.to_path_buf(),
            source,
        };
        let mut reader = BufReader::new(File::open(path).map_err(read_error)?);
        let prober = self.prober();
        let mut tally = Tally::new();
        let mut buf = String::new();

        loop {
            buf.clear();
            if reader.read_line(&mut buf).map_err(read_error)? == 0 {
                break;
            }

            let line = strip_line(&buf);
            if !starts_with_ignore_case(line, STREAM_SCHEME) {
                continue;
            }

            let result = prober.probe(line)?;
            tally.record(result.ok);
            if !result.ok {
                writeln!(out, "mpd: {}\n", result.error_message)?;
            }
        }

        Ok((tally.total() > 0).then_some(tally))
    }

    /// URL-list check with its summary line
    pub fn check_url_list(&self, path: &Path, out: &mut dyn Write) -> Result<Outcome> {
        let Some(tally) = self.scan_url_list(path, out)? else {
            return Ok(Outcome::Failure(format!(
                "{} contains no usable url line",
                path.display()
            )));
        };

        let summary = format!(
            "{} contains {} playable urls and {} bad urls",
            path.display(),
            tally.good(),
            tally.bad()
        );
        if tally.all_good() {
            Ok(Outcome::Success(summary))
        } else {
            Ok(Outcome::Failure(summary))
        }
    }
}
