//! # Termination
//!
//! The search stops when the best roster scores below a target fitness. With
//! the default target of 1 that means a roster with no violations at all,
//! which may never be found, so a generation cap and a wall-clock cap can be
//! added as safety valves. Without them the search is unbounded.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use rostergen::evolution::{StopReason, Termination};
//!
//! let termination = Termination::default()
//!     .with_max_generations(500)
//!     .with_time_limit(Duration::from_secs(30));
//!
//! assert_eq!(termination.check(0, 10, Duration::ZERO), Some(StopReason::TargetReached));
//! assert_eq!(termination.check(250, 500, Duration::ZERO), Some(StopReason::GenerationLimit));
//! assert_eq!(termination.check(250, 10, Duration::from_secs(1)), None);
//! ```
use std::fmt;
use std::time::Duration;

/// Why a search ended.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The best roster scored below the target fitness.
    TargetReached,
    /// The generation cap was reached first.
    GenerationLimit,
    /// The wall-clock cap was reached first.
    TimeLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::TargetReached => write!(f, "target fitness reached"),
            StopReason::GenerationLimit => write!(f, "generation limit reached"),
            StopReason::TimeLimit => write!(f, "time limit reached"),
        }
    }
}

/// Stopping policy of a search.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Termination {
    target_fitness: u32,
    max_generations: Option<usize>,
    time_limit: Option<Duration>,
}

impl Termination {
    /// Stops once the best fitness is strictly below `target_fitness`, with no caps.
    pub fn until_fitness_below(target_fitness: u32) -> Self {
        Self {
            target_fitness,
            max_generations: None,
            time_limit: None,
        }
    }

    /// Also stops after `max_generations` completed generations.
    pub fn with_max_generations(mut self, max_generations: usize) -> Self {
        self.max_generations = Some(max_generations);
        self
    }

    /// Also stops once the search has run for `time_limit`.
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn get_target_fitness(&self) -> u32 {
        self.target_fitness
    }

    pub fn get_max_generations(&self) -> Option<usize> {
        self.max_generations
    }

    pub fn get_time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Whether neither cap is set.
    pub fn is_unbounded(&self) -> bool {
        self.max_generations.is_none() && self.time_limit.is_none()
    }

    /// Decides whether to stop after `generation` completed generations.
    ///
    /// The target is checked first, so a roster that reaches it on the last
    /// allowed generation still counts as converged.
    pub fn check(
        &self,
        best_fitness: u32,
        generation: usize,
        elapsed: Duration,
    ) -> Option<StopReason> {
        if best_fitness < self.target_fitness {
            return Some(StopReason::TargetReached);
        }
        if self.max_generations.is_some_and(|max| generation >= max) {
            return Some(StopReason::GenerationLimit);
        }
        if self.time_limit.is_some_and(|limit| elapsed >= limit) {
            return Some(StopReason::TimeLimit);
        }
        None
    }
}

impl Default for Termination {
    /// Stops only on a violation-free roster.
    fn default() -> Self {
        Self::until_fitness_below(1)
    }
}
