//! Test helpers: a scripted stand-in for mpc, pgrep and file

#![allow(dead_code)]

use radiocheck::{Capture, CommandOutput, CommandRunner, Result};
use radiocheck_common::ProbeConfig;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Pretends to be a running mpd with a fixed set of broken stream URLs
///
/// - `pgrep` succeeds unless [`ScriptedRunner::without_daemon`] was used
/// - `mpc add <url>` remembers the URL, `mpc clear` forgets it
/// - `mpc status` reports `ERROR: Failed to open "<url>"` for broken URLs
/// - `file -b -- <path>` answers from [`ScriptedRunner::describe`], default `ASCII text`
#[derive(Default)]
pub struct ScriptedRunner {
    daemon_down: bool,
    broken: HashSet<String>,
    descriptions: HashMap<String, String>,
    queued: RefCell<Option<String>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Behave as if mpd is not running
    pub fn without_daemon(mut self) -> Self {
        self.daemon_down = true;
        self
    }

    /// Make `url` fail to play
    pub fn broken(mut self, url: &str) -> Self {
        self.broken.insert(url.to_string());
        self
    }

    /// Set the `file -b` answer for `path`
    pub fn describe(mut self, path: &Path, description: &str) -> Self {
        self.descriptions
            .insert(path.to_string_lossy().into_owned(), description.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// URLs passed to `mpc add`, in order
    pub fn probed_urls(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|c| c.strip_prefix("mpc add ").map(str::to_string))
            .collect()
    }

    pub fn count(&self, program: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.split(' ').next() == Some(program))
            .count()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str], _capture: Capture) -> Result<CommandOutput> {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        self.calls.borrow_mut().push(line);

        let output = match (program, args) {
            ("pgrep", _) if self.daemon_down => CommandOutput::failed(1),
            ("file", ["-b", "--", path]) => CommandOutput::ok(
                self.descriptions
                    .get(*path)
                    .cloned()
                    .unwrap_or_else(|| "ASCII text".to_string()),
            ),
            ("mpc", ["add", url]) => {
                *self.queued.borrow_mut() = Some(url.to_string());
                CommandOutput::ok("")
            }
            ("mpc", ["clear"]) => {
                *self.queued.borrow_mut() = None;
                CommandOutput::ok("")
            }
            ("mpc", ["status"]) => CommandOutput::ok(self.status()),
            _ => CommandOutput::ok(""),
        };
        Ok(output)
    }
}

impl ScriptedRunner {
    fn status(&self) -> String {
        match self.queued.borrow().as_deref() {
            Some(url) if self.broken.contains(url) => format!(
                "{url}\n[playing] #1/1   0:00/0:00 (0%)\nvolume:  0%   repeat: off   random: off   single: off   consume: off\nERROR: Failed to open \"{url}\"\n"
            ),
            Some(url) => format!(
                "Radio Station: Live\n[playing] #1/1   0:03/0:00 (0%)\nvolume:  0%   repeat: off   random: off   single: off   consume: off\n{url}\n"
            ),
            None => "volume:  0%   repeat: off   random: off   single: off   consume: off\n".to_string(),
        }
    }
}

/// Probe config with no settle delay
pub fn quick_config() -> ProbeConfig {
    ProbeConfig {
        settle_delay_ms: 0,
        ..ProbeConfig::default()
    }
}

/// Write a `[playlist]` file with the given station
pub fn write_pls(path: &Path, title: &str, url: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(
        path,
        format!("[playlist]\nNumberOfEntries=1\nFile1={url}\nTitle1={title}\nLength1=-1\nVersion=2\n"),
    )
    .unwrap();
    path.to_path_buf()
}

/// Report text written during a check
pub fn report_text(out: &[u8]) -> String {
    String::from_utf8(out.to_vec()).unwrap()
}
