//! # Crossover
//!
//! Mating blends two parent rosters cell by cell. Each cell is copied from the
//! first parent, copied from the second parent, or replaced by a fresh random
//! duty. The fresh-duty share is the only mutation the search applies.
use crate::{
    error::{Result, RosterError},
    rng::RandomNumberGenerator,
    roster::{Duty, Grid, Schedule, DAYS, NURSES},
};

/// Per-cell inheritance odds, in percent.
///
/// A cell comes from the first parent with probability `parent1`%, from the
/// second parent with probability `parent2`%, and is drawn fresh otherwise.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossoverRates {
    parent1: u32,
    parent2: u32,
}

impl CrossoverRates {
    /// Creates new rates.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the two parent shares exceed 100%.
    pub fn new(parent1: u32, parent2: u32) -> Result<Self> {
        let rates = Self { parent1, parent2 };
        rates.validate()?;
        Ok(rates)
    }

    pub fn parent1(&self) -> u32 {
        self.parent1
    }

    pub fn parent2(&self) -> u32 {
        self.parent2
    }

    /// Share of cells drawn fresh.
    pub fn mutation(&self) -> u32 {
        100u32.saturating_sub(self.parent1 + self.parent2)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.parent1 + self.parent2 > 100 {
            return Err(RosterError::Configuration(format!(
                "Crossover rates must not exceed 100% in total, got {}% + {}%",
                self.parent1, self.parent2
            )));
        }
        Ok(())
    }
}

impl Default for CrossoverRates {
    fn default() -> Self {
        Self {
            parent1: 45,
            parent2: 45,
        }
    }
}

/// Produces one child from two parents and scores it.
pub fn mate(
    parent1: &Schedule,
    parent2: &Schedule,
    rates: &CrossoverRates,
    rng: &mut RandomNumberGenerator,
) -> Schedule {
    let first = parent1.grid();
    let second = parent2.grid();
    let mut child: Grid = [[Duty::Holiday; DAYS]; NURSES];

    for nurse in 0..NURSES {
        for day in 0..DAYS {
            let roll = rng.gen_percent();
            child[nurse][day] = if roll < rates.parent1 {
                first[nurse][day]
            } else if roll < rates.parent1 + rates.parent2 {
                second[nurse][day]
            } else {
                rng.sample()
            };
        }
    }

    Schedule::new(child)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness;

    #[test]
    fn test_default_rates() {
        let rates = CrossoverRates::default();
        assert_eq!(rates.parent1(), 45);
        assert_eq!(rates.parent2(), 45);
        assert_eq!(rates.mutation(), 10);
    }

    #[test]
    fn test_invalid_rates() {
        assert!(CrossoverRates::new(60, 50).is_err());
        assert!(CrossoverRates::new(50, 50).is_ok());
    }

    #[test]
    fn test_child_fitness_is_scored() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        let a = Schedule::new([[Duty::Morning; DAYS]; NURSES]);
        let b = Schedule::new([[Duty::Night; DAYS]; NURSES]);

        let child = mate(&a, &b, &CrossoverRates::default(), &mut rng);
        assert_eq!(child.fitness(), fitness::evaluate(child.grid()));
    }

    #[test]
    fn test_pure_inheritance_without_mutation() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let a = Schedule::new([[Duty::Morning; DAYS]; NURSES]);
        let b = Schedule::new([[Duty::Evening; DAYS]; NURSES]);

        let only_first = CrossoverRates::new(100, 0).unwrap();
        assert_eq!(mate(&a, &b, &only_first, &mut rng), a);

        let only_second = CrossoverRates::new(0, 100).unwrap();
        assert_eq!(mate(&a, &b, &only_second, &mut rng), b);
    }

    #[test]
    fn test_same_seed_same_child() {
        let a = Schedule::new([[Duty::Morning; DAYS]; NURSES]);
        let b = Schedule::new([[Duty::Holiday; DAYS]; NURSES]);
        let rates = CrossoverRates::default();

        let first = mate(&a, &b, &rates, &mut RandomNumberGenerator::from_seed(77));
        let second = mate(&a, &b, &rates, &mut RandomNumberGenerator::from_seed(77));
        assert_eq!(first, second);
    }
}
