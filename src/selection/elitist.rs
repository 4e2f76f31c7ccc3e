use crate::error::{Result, RosterError};
use crate::roster::Schedule;

/// Carries the best individuals of a sorted population into the next
/// generation unchanged.
///
/// The elite size is `percent * population / 100`, rounded down.
///
/// # Examples
///
/// ```
/// use rostergen::roster::{Duty, Schedule, DAYS, NURSES};
/// use rostergen::selection::{sort_by_fitness, ElitistSelection};
///
/// let mut population = vec![
///     Schedule::new([[Duty::Holiday; DAYS]; NURSES]),
///     Schedule::new([[Duty::Night; DAYS]; NURSES]),
/// ];
/// sort_by_fitness(&mut population);
///
/// let selection = ElitistSelection::new(50).unwrap();
/// let elite = selection.select(&population).unwrap();
///
/// assert_eq!(elite, vec![population[0]]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElitistSelection {
    percent: u32,
}

impl ElitistSelection {
    /// Creates a new ElitistSelection keeping `percent` of the population.
    ///
    /// # Errors
    ///
    /// Returns an error if `percent` is above 100.
    pub fn new(percent: u32) -> Result<Self> {
        let selection = Self { percent };
        selection.validate()?;
        Ok(selection)
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }

    /// Number of elites kept from a population of `population_size`.
    pub fn elite_count(&self, population_size: usize) -> usize {
        self.percent as usize * population_size / 100
    }

    /// Copies the elite prefix of a population sorted best first.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::EmptyPopulation`] if `sorted` is empty.
    pub fn select(&self, sorted: &[Schedule]) -> Result<Vec<Schedule>> {
        if sorted.is_empty() {
            return Err(RosterError::EmptyPopulation);
        }
        Ok(sorted[..self.elite_count(sorted.len())].to_vec())
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.percent > 100 {
            return Err(RosterError::Configuration(format!(
                "Elite percentage must be at most 100, got {}",
                self.percent
            )));
        }
        Ok(())
    }
}

impl Default for ElitistSelection {
    /// Keeps the best 10%.
    fn default() -> Self {
        Self { percent: 10 }
    }
}
