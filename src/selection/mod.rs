pub mod elitist;
pub mod truncation;

pub use elitist::ElitistSelection;
pub use truncation::TruncationSelection;

use crate::error::{OptionExt, Result, RosterError};
use crate::roster::Schedule;

/// Sorts a population best first. The sort is stable, so equally fit
/// schedules keep their relative order.
pub fn sort_by_fitness(population: &mut [Schedule]) {
    population.sort_by_key(Schedule::fitness);
}

/// Returns the fittest schedule without requiring a sorted population.
pub fn best(population: &[Schedule]) -> Result<&Schedule> {
    population
        .iter()
        .min_by_key(|schedule| schedule.fitness())
        .ok_or_else_roster(|| RosterError::EmptyPopulation)
}
