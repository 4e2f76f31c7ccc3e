use crate::error::{Result, RosterError};
use crate::rng::RandomNumberGenerator;
use crate::roster::Schedule;

/// Picks mating parents uniformly from the best part of a sorted population.
///
/// With the default of 50%, both parents of every child are drawn from index
/// range `[0, population / 2)`. Parents are drawn independently, so a child
/// may have the same individual twice.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationSelection {
    percent: u32,
}

impl TruncationSelection {
    /// Creates a new TruncationSelection drawing from the best `percent` of
    /// the population.
    ///
    /// # Errors
    ///
    /// Returns an error if `percent` is 0 or above 100.
    pub fn new(percent: u32) -> Result<Self> {
        let selection = Self { percent };
        selection.validate()?;
        Ok(selection)
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }

    /// Size of the mating pool for a population of `population_size`.
    pub fn pool_size(&self, population_size: usize) -> usize {
        self.percent as usize * population_size / 100
    }

    /// Draws two parents from a population sorted best first.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::EmptyPopulation`] if the mating pool is empty.
    pub fn select<'a>(
        &self,
        sorted: &'a [Schedule],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(&'a Schedule, &'a Schedule)> {
        let pool = self.pool_size(sorted.len());
        if pool == 0 {
            return Err(RosterError::EmptyPopulation);
        }
        let first = rng.gen_index(pool);
        let second = rng.gen_index(pool);
        Ok((&sorted[first], &sorted[second]))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.percent == 0 || self.percent > 100 {
            return Err(RosterError::Configuration(format!(
                "Mating pool percentage must be between 1 and 100, got {}",
                self.percent
            )));
        }
        Ok(())
    }
}

impl Default for TruncationSelection {
    /// Draws from the better half.
    fn default() -> Self {
        Self { percent: 50 }
    }
}
