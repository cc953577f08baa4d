//! Checks for each kind of target
//!
//! Every check writes per-item details to the report writer as it goes and
//! ends in a single [`Outcome`]. Fatal errors (daemon gone, unreadable file,
//! unrecognized argument) abort the check and become `Outcome::Failure`.

mod dir;
mod file;
mod url;

pub use dir::find_playlists;
pub use file::FileType;

use crate::classify::Target;
use crate::command::CommandRunner;
use crate::probe::Prober;
use crate::report::Outcome;
use crate::Result;
use radiocheck_common::ProbeConfig;
use std::io::Write;
use std::path::Path;
use tracing::error;

/// Runs checks against mpd through a [`CommandRunner`]
pub struct Checker<'a> {
    runner: &'a dyn CommandRunner,
    config: &'a ProbeConfig,
}

impl<'a> Checker<'a> {
    pub fn new(runner: &'a dyn CommandRunner, config: &'a ProbeConfig) -> Self {
        Self { runner, config }
    }

    fn prober(&self) -> Prober<'a> {
        Prober::new(self.runner, self.config)
    }

    /// Classify `arg` and run the matching check
    pub fn run(&self, arg: &str, radio_dir: &Path, out: &mut dyn Write) -> Outcome {
        match Target::classify(arg, radio_dir) {
            Ok(target) => self.dispatch(&target, out),
            Err(e) => Outcome::Failure(e.to_string()),
        }
    }

    /// Run the check for an already classified target
    pub fn dispatch(&self, target: &Target, out: &mut dyn Write) -> Outcome {
        let result: Result<Outcome> = match target {
            Target::Directory(dir) => self.check_dir(dir, out),
            Target::File(file) => self.check_file(file, out),
            Target::Url(url) => self.check_url(url),
        };

        result.unwrap_or_else(|e| {
            error!("Check aborted: {}", e);
            Outcome::Failure(e.to_string())
        })
    }
}
