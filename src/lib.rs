pub mod breeding;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod rng;
pub mod roster;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{OptionExt, Result, RosterError};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, Termination};
pub use roster::{Duty, Schedule};
