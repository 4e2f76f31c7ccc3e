//! # Breeding
//!
//! Genetic operators over rosters: uniform random generation for the initial
//! population and [`mate`] for every later generation.
pub mod crossover;

use crate::{
    rng::RandomNumberGenerator,
    roster::{Duty, Grid, Schedule, DAYS, NURSES},
};

pub use crossover::{mate, CrossoverRates};

/// Builds a roster whose every cell is an independent uniform duty.
pub fn random_schedule(rng: &mut RandomNumberGenerator) -> Schedule {
    let mut grid: Grid = [[Duty::Holiday; DAYS]; NURSES];
    for row in grid.iter_mut() {
        for cell in row.iter_mut() {
            *cell = rng.sample();
        }
    }
    Schedule::new(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness;

    #[test]
    fn test_random_schedule_is_scored() {
        let mut rng = RandomNumberGenerator::from_seed(21);
        let schedule = random_schedule(&mut rng);

        assert_eq!(schedule.fitness(), fitness::evaluate(schedule.grid()));
    }

    #[test]
    fn test_random_schedules_differ() {
        let mut rng = RandomNumberGenerator::from_seed(21);
        let first = random_schedule(&mut rng);
        let second = random_schedule(&mut rng);

        // 70 independent cells; a collision is practically impossible.
        assert_ne!(first, second);
    }

    #[test]
    fn test_random_schedule_uses_every_duty() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let schedule = random_schedule(&mut rng);

        for duty in Duty::ALL {
            assert!(schedule.grid().iter().flatten().any(|&cell| cell == duty));
        }
    }
}
