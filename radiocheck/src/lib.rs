//! # radiocheck
//!
//! Verifies that mpd can open and play internet radio streams. Targets can be
//! a single URL, a `.pls` playlist, a text file listing URLs one per line, a
//! directory tree of `.pls` files, or the `RADIO` sentinel naming the moOde
//! station directory.
//!
//! All playback goes through mpd's command-line client; every external
//! program is invoked through [`command::CommandRunner`] so the checks can be
//! driven by a fake in tests.

pub mod check;
pub mod classify;
pub mod command;
pub mod error;
pub mod playlist;
pub mod probe;
pub mod report;

pub use check::Checker;
pub use classify::Target;
pub use command::{Capture, CommandOutput, CommandRunner, SystemRunner};
pub use error::{Error, Result};
pub use playlist::PlaylistRecord;
pub use probe::{ProbeResult, Prober};
pub use report::{Outcome, Tally};
