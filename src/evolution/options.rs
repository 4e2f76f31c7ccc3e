//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the run-time parameters of a roster
//! search: population size, stopping policy, worker pool sizing and logging.
//! The roster shape and the constraint weights are fixed and not part of the
//! options.
//!
//! ## Example
//!
//! ```rust
//! use rostergen::evolution::options::{EvolutionOptions, LogLevel};
//! use rostergen::evolution::Termination;
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(
//!     200,
//!     Termination::default().with_max_generations(1_000),
//!     LogLevel::Minimal,
//! );
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 100);
//! ```
//!
//! ## Structs
//!
//! ### `EvolutionOptions`
//!
//! #### Fields
//!
//! - `population_size`: The number of rosters in every generation.
//! - `termination`: When the search stops, see [`Termination`].
//! - `log_level`: How much per-generation progress is logged.
//! - `num_threads`: Size of a dedicated worker pool. `None` uses the global pool.
//! - `parallel_threshold`: The minimum number of rosters built in parallel.
//!
//! ### `LogLevel`
//!
//! - `Verbose`: Logs every generation and the best roster.
//! - `Minimal`: Logs a generation only when the best fitness improves.
//! - `None`: Logs only the start and end of a search.

use super::termination::Termination;
use crate::error::{Result, RosterError};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct EvolutionOptions {
    population_size: usize,
    termination: Termination,
    log_level: LogLevel,
    num_threads: Option<usize>,
    /// Minimum number of rosters to build in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn new(population_size: usize, termination: Termination, log_level: LogLevel) -> Self {
        Self {
            population_size,
            termination,
            log_level,
            num_threads: None,
            parallel_threshold: 64, // Default parallel threshold
        }
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_termination(&self) -> &Termination {
        &self.termination
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    pub fn get_num_threads(&self) -> Option<usize> {
        self.num_threads
    }

    /// Returns the minimum number of rosters to build in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the stopping policy.
    pub fn set_termination(&mut self, termination: Termination) {
        self.termination = termination;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the size of the dedicated worker pool.
    pub fn set_num_threads(&mut self, num_threads: Option<usize>) {
        self.num_threads = num_threads;
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Checks the options for values the search cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Configuration`] if the population has fewer than
    /// two rosters or the worker pool size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(RosterError::Configuration(format!(
                "Population size must be at least 2, got {}",
                self.population_size
            )));
        }

        if self.termination.get_max_generations() == Some(0) {
            return Err(RosterError::Configuration(
                "Generation cap cannot be zero".to_string(),
            ));
        }

        if self.num_threads == Some(0) {
            return Err(RosterError::Configuration(
                "Number of threads cannot be zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rostergen::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .population_size(50)
    ///     .log_level(LogLevel::Minimal)
    ///     .num_threads(4)
    ///     .parallel_threshold(16)
    ///     .build();
    /// assert_eq!(options.get_num_threads(), Some(4));
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self::new(100, Termination::default(), LogLevel::None)
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    termination: Option<Termination>,
    log_level: Option<LogLevel>,
    num_threads: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the stopping policy.
    pub fn termination(mut self, value: Termination) -> Self {
        self.termination = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Runs the search on a dedicated pool of `value` threads.
    pub fn num_threads(mut self, value: usize) -> Self {
        self.num_threads = Some(value);
        self
    }

    /// Sets the parallel threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            termination: self.termination.unwrap_or(defaults.termination),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            num_threads: self.num_threads,
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        }
    }
}
