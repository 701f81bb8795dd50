//! Search limits and the wall-clock budget.
//!
//! Cancellation is cooperative and coarse: the search polls `expired` only
//! between root moves, so the worst-case overrun is bounded by one root
//! move's full subtree.

use std::time::{Duration, Instant};

/// Limits a search by depth and, optionally, wall-clock time.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// Maximum search depth in plies.
    pub depth: u8,
    /// Wall-clock budget for the whole move decision (None = unlimited).
    pub move_time: Option<Duration>,
}

impl SearchLimits {
    /// Limits with only a depth constraint.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
        }
    }

    /// Limits with both depth and time constraints.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Deadline tracker for one search invocation.
#[derive(Debug, Clone)]
pub struct TimeControl {
    started: Instant,
    budget: Option<Duration>,
}

impl TimeControl {
    /// Start the clock against the given budget (None = unlimited).
    pub fn start(budget: Option<Duration>) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    /// Whether the budget has been spent.
    pub fn expired(&self) -> bool {
        match self.budget {
            Some(budget) => self.started.elapsed() >= budget,
            None => false,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
