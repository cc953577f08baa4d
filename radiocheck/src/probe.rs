//! Playback probe
//!
//! One probe asks mpd to play a URL and looks at `mpc status` shortly after.
//! mpd reports stream failures on a status line of the form
//! `ERROR: Failed to decode http://...`.
//!
//! Side effects on the daemon: the queue ends empty and the volume at zero.

use crate::command::{Capture, CommandOutput, CommandRunner};
use crate::{Error, Result};
use radiocheck_common::ProbeConfig;
use tracing::{debug, warn};

/// Marker mpd puts in front of its error text in `mpc status` output
pub const ERROR_MARKER: &str = "ERROR: ";

/// Outcome of probing one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub ok: bool,
    /// mpd's error text, empty when `ok`
    pub error_message: String,
}

impl ProbeResult {
    pub fn playable() -> Self {
        Self {
            ok: true,
            error_message: String::new(),
        }
    }

    pub fn failed(error_message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error_message: error_message.into(),
        }
    }

    /// Classify `mpc status` output
    pub fn from_status(status: &str) -> Self {
        match extract_error(status) {
            Some(message) => Self::failed(message),
            None => Self::playable(),
        }
    }
}

/// Text after the first error marker up to the end of that line, trimmed
pub fn extract_error(status: &str) -> Option<String> {
    let (_, rest) = status.split_once(ERROR_MARKER)?;
    let line = rest.split('\n').next().unwrap_or_default();
    Some(line.trim().to_string())
}

/// Submits URLs to mpd and reports whether they play
pub struct Prober<'a> {
    runner: &'a dyn CommandRunner,
    config: &'a ProbeConfig,
}

impl<'a> Prober<'a> {
    pub fn new(runner: &'a dyn CommandRunner, config: &'a ProbeConfig) -> Self {
        Self { runner, config }
    }

    /// Fail unless a process owned by the daemon user exists
    pub fn ensure_daemon_running(&self) -> Result<()> {
        let user = self.config.daemon_user.as_str();
        let output = self
            .runner
            .run(&self.config.pgrep_binary, &["-u", user], Capture::Discard)?;

        if output.success {
            Ok(())
        } else {
            Err(Error::DaemonNotRunning {
                user: user.to_string(),
            })
        }
    }

    /// Try to play `url` and report mpd's verdict
    ///
    /// Only a missing daemon or an unreadable status is an `Err`; every
    /// other step is best-effort. The queue is cleared again before
    /// returning.
    pub fn probe(&self, url: &str) -> Result<ProbeResult> {
        self.ensure_daemon_running()?;

        self.mute();
        self.mpc_best_effort(&["clear"]);
        self.mpc_best_effort(&["add", url]);
        self.mpc_best_effort(&["play"]);

        let delay = self.config.settle_delay();
        debug!(url, ?delay, "Waiting for mpd to connect");
        std::thread::sleep(delay);

        let status = self.mpc(&["status"], Capture::Stdout);
        self.mpc_best_effort(&["clear"]);
        let status = status?;

        let result = ProbeResult::from_status(&status.stdout);
        if result.ok {
            debug!(url, "Playable");
        } else {
            debug!(url, error = %result.error_message, "Not playable");
        }
        Ok(result)
    }

    /// Set the output volume to zero; false if the step failed
    fn mute(&self) -> bool {
        match self.config.volume_helper() {
            Some(helper) => {
                let helper = helper.to_string_lossy();
                let result = self.runner.run(&helper, &["0"], Capture::Discard);
                best_effort(&format!("{} 0", helper), result)
            }
            None => self.mpc_best_effort(&["volume", "0"]),
        }
    }

    fn mpc(&self, args: &[&str], capture: Capture) -> Result<CommandOutput> {
        let mut full_args: Vec<String> = Vec::with_capacity(args.len() + 2);
        if let Some(host) = &self.config.mpd_host {
            full_args.push(format!("--host={}", host));
        }
        if let Some(port) = self.config.mpd_port {
            full_args.push(format!("--port={}", port));
        }
        full_args.extend(args.iter().map(|a| a.to_string()));

        let arg_refs: Vec<&str> = full_args.iter().map(String::as_str).collect();
        debug!("{} {}", self.config.mpc_binary, arg_refs.join(" "));
        self.runner.run(&self.config.mpc_binary, &arg_refs, capture)
    }

    fn mpc_best_effort(&self, args: &[&str]) -> bool {
        let result = self.mpc(args, Capture::Discard);
        best_effort(&format!("mpc {}", args.join(" ")), result)
    }
}

/// Log a failed best-effort step at warn; true if it succeeded
fn best_effort(step: &str, result: Result<CommandOutput>) -> bool {
    match result {
        Ok(output) if output.success => true,
        Ok(output) => {
            warn!("{} exited with {:?}", step, output.code);
            false
        }
        Err(e) => {
            warn!("{} failed: {}", step, e);
            false
        }
    }
}
