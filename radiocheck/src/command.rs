//! External command invocation
//!
//! mpc, pgrep, the volume helper and `file` are all reached through
//! [`CommandRunner`]. [`SystemRunner`] spawns real processes; tests supply
//! a scripted runner instead.

use crate::{Error, Result};
use std::process::{Command, Stdio};

/// What to do with a child's stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Don't keep stdout (null device or inherited, per runner setting)
    Discard,
    /// Collect stdout into [`CommandOutput::stdout`]
    Stdout,
}

/// Result of one finished child process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit status was zero
    pub success: bool,
    /// Exit code, `None` if terminated by a signal
    pub code: Option<i32>,
    /// Captured stdout (empty unless [`Capture::Stdout`])
    pub stdout: String,
}

impl CommandOutput {
    /// Successful exit with the given stdout
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
        }
    }

    /// Failed exit with the given code and no output
    pub fn failed(code: i32) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
        }
    }
}

/// Run a program to completion
///
/// An `Err` means the program could not be run at all (not found, not
/// executable). A non-zero exit status is reported through
/// [`CommandOutput::success`].
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str], capture: Capture) -> Result<CommandOutput>;
}

/// Spawns real child processes with `std::process::Command`
#[derive(Debug, Clone)]
pub struct SystemRunner {
    suppress_child_output: bool,
}

impl SystemRunner {
    pub fn new(suppress_child_output: bool) -> Self {
        Self {
            suppress_child_output,
        }
    }

    fn uncaptured(&self) -> Stdio {
        if self.suppress_child_output {
            Stdio::null()
        } else {
            Stdio::inherit()
        }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new(true)
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], capture: Capture) -> Result<CommandOutput> {
        tracing::trace!(program, ?args, ?capture, "Spawning");

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stderr(self.uncaptured());

        let spawn_error = |e: std::io::Error| Error::Command {
            program: program.to_string(),
            reason: e.to_string(),
        };

        match capture {
            Capture::Stdout => {
                let output = command
                    .stdout(Stdio::piped())
                    .output()
                    .map_err(spawn_error)?;
                Ok(CommandOutput {
                    success: output.status.success(),
                    code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                })
            }
            Capture::Discard => {
                let status = command
                    .stdout(self.uncaptured())
                    .status()
                    .map_err(spawn_error)?;
                Ok(CommandOutput {
                    success: status.success(),
                    code: status.code(),
                    stdout: String::new(),
                })
            }
        }
    }
}
