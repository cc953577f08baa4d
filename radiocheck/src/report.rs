//! Run outcome and batch tallies

use std::fmt;

/// Final result of a run
///
/// `main` prints the message and turns the variant into the exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(msg) | Self::Failure(msg) => msg,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Counts for a batch scan
///
/// Only grows through [`Tally::record_good`] and [`Tally::record_bad`], so
/// `good + bad == total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    total: usize,
    good: usize,
    bad: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_good(&mut self) {
        self.total += 1;
        self.good += 1;
    }

    pub fn record_bad(&mut self) {
        self.total += 1;
        self.bad += 1;
    }

    /// Record a probe verdict
    pub fn record(&mut self, ok: bool) {
        if ok {
            self.record_good();
        } else {
            self.record_bad();
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn good(&self) -> usize {
        self.good
    }

    pub fn bad(&self) -> usize {
        self.bad
    }

    /// No item was bad
    pub fn all_good(&self) -> bool {
        self.bad == 0
    }
}
