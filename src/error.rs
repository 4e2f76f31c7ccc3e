//! # Error Types
//!
//! This module defines the error type used throughout the roster optimizer.
//! The search itself cannot fail once it is running; errors come from invalid
//! configuration, from building the worker pool, or from parsing a roster
//! written in its letter form.
//!
//! ## Examples
//!
//! ```rust
//! use rostergen::error::{RosterError, Result};
//! use rostergen::evolution::EvolutionOptions;
//!
//! fn checked(options: &EvolutionOptions) -> Result<()> {
//!     options.validate()
//! }
//!
//! let mut options = EvolutionOptions::default();
//! options.set_population_size(1);
//!
//! match checked(&options) {
//!     Err(RosterError::Configuration(msg)) => assert!(msg.contains("Population size")),
//!     _ => panic!("expected a configuration error"),
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running a roster search.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a roster contains a letter that is not a duty code.
    #[error("Invalid duty code: '{0}' (expected one of M, E, N, H)")]
    InvalidDuty(char),

    /// Error that occurs when a roster has the wrong number of nurses or days.
    #[error("Shape error: expected {expected_nurses} rows of {expected_days} duties, {found}")]
    Shape {
        expected_nurses: usize,
        expected_days: usize,
        found: String,
    },

    /// Error that occurs when the dedicated worker pool cannot be created.
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// A specialized Result type for roster operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `RosterError`.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, RosterError>` using
    /// a closure to generate the error.
    fn ok_or_else_roster<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> RosterError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_roster<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> RosterError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RosterError::Configuration("Population size must be at least 2".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: Population size must be at least 2"
        );

        let err = RosterError::InvalidDuty('X');
        assert!(err.to_string().contains("'X'"));

        let err = RosterError::Shape {
            expected_nurses: 10,
            expected_days: 7,
            found: "3 rows".to_string(),
        };
        assert!(err.to_string().contains("10 rows of 7 duties"));
    }

    #[test]
    fn test_option_ext() {
        let empty: Option<u32> = None;
        let result = empty.ok_or_else_roster(|| RosterError::EmptyPopulation);
        assert!(matches!(result, Err(RosterError::EmptyPopulation)));

        let present = Some(3).ok_or_else_roster(|| RosterError::EmptyPopulation);
        assert_eq!(present.unwrap(), 3);
    }
}
