//! Recursive `.pls` directory scan

use super::Checker;
use crate::playlist::parse_playlist_file;
use crate::report::{Outcome, Tally};
use crate::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

const PLAYLIST_EXTENSION: &str = "pls";

/// All `*.pls` files under `root`, at any depth, in file-name order
///
/// Hidden files and directories are skipped, matching shell `**/*.pls`
/// globbing. Symlinked playlists and directories are followed; a symlink
/// loop, like any other unreadable entry, is logged and skipped.
pub fn find_playlists(root: &Path) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    let mut playlists = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && has_playlist_extension(entry.path()) {
                    playlists.push(entry.into_path());
                }
            }
            Err(e) => {
                warn!("Error accessing entry: {}", e);
            }
        }
    }

    debug!("{} playlists found under {}", playlists.len(), root.display());
    playlists
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn has_playlist_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == PLAYLIST_EXTENSION)
}

impl Checker<'_> {
    /// Probe the station of every playlist under `root`
    ///
    /// Incomplete or unreadable playlists count as bad without a probe.
    /// Stops early only on a fatal error such as the daemon disappearing.
    pub fn scan_dir(&self, root: &Path, out: &mut dyn Write) -> Result<Tally> {
        let prober = self.prober();
        let mut tally = Tally::new();

        for path in find_playlists(root) {
            let record = match parse_playlist_file(&path) {
                Ok(record) => record,
                Err(e) => {
                    warn!("{}", e);
                    tally.record_bad();
                    writeln!(out, "{}; skip to next pls file\n", e)?;
                    continue;
                }
            };

            let Some((name, url)) = record.station() else {
                tally.record_bad();
                writeln!(
                    out,
                    "{} missing 'File1=' and/or 'Title1=' line; skip to next pls file\n",
                    path.display()
                )?;
                continue;
            };

            let result = prober.probe(url)?;
            tally.record(result.ok);
            if !result.ok {
                writeln!(
                    out,
                    "station: {}\nfile: {}\nMPD {}\n",
                    name,
                    path.display(),
                    result.error_message
                )?;
            }
        }

        info!(
            total = tally.total(),
            good = tally.good(),
            bad = tally.bad(),
            "Directory scan of {} complete",
            root.display()
        );
        Ok(tally)
    }

    /// Directory scan with its summary line
    pub fn check_dir(&self, root: &Path, out: &mut dyn Write) -> Result<Outcome> {
        let tally = self.scan_dir(root, out)?;
        let summary = format!(
            "{} contains {} pls files: {} playable and {} not playable",
            root.display(),
            tally.total(),
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
