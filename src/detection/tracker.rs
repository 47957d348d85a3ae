//! Consecutive-hit tracking
//!
//! Turns per-window decisions into trend confirmations. The counter only
//! advances when both the current and the previous window tested positive,
//! so the first hit of a streak arms the tracker without counting. A streak
//! of `requirement + 1` positive windows is needed to reach the requirement.

use super::types::DEFAULT_DETECTION_REQUIREMENT;

/// Hysteresis state owned by a monitoring loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitTracker {
    requirement: usize,
    count: usize,
    previous: bool,
}

impl Default for HitTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DETECTION_REQUIREMENT)
    }
}

impl HitTracker {
    /// Create an idle tracker; a requirement of 0 falls back to the default
    pub fn new(requirement: usize) -> Self {
        let requirement = if requirement < 1 {
            DEFAULT_DETECTION_REQUIREMENT
        } else {
            requirement
        };
        Self {
            requirement,
            count: 0,
            previous: false,
        }
    }

    /// Feed the next window's decision, in source order.
    ///
    /// Returns `true` when this window confirms a trend. The counter is reset
    /// on confirmation so the same stream can confirm again later.
    pub fn step(&mut self, detected: bool) -> bool {
        if detected && self.previous {
            self.count += 1;
        } else {
            self.count = 0;
        }
        self.previous = detected;

        if self.count == self.requirement {
            self.count = 0;
            return true;
        }

        false
    }

    /// Current consecutive-hit count
    pub fn count(&self) -> usize {
        self.count
    }

    /// Decision of the most recent window
    pub fn previous(&self) -> bool {
        self.previous
    }

    pub fn requirement(&self) -> usize {
        self.requirement
    }

    /// Whether the tracker is part-way through a streak
    pub fn is_armed(&self) -> bool {
        self.count > 0
    }

    /// Return to the initial state
    pub fn reset(&mut self) {
        self.count = 0;
        self.previous = false;
    }
}
