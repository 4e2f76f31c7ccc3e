use crate::{
    breeding::CrossoverRates,
    selection::{ElitistSelection, TruncationSelection},
};

use super::EvolutionLauncher;

/// Fluent construction of an [`EvolutionLauncher`]. Operators that are not
/// set keep their defaults: 10% elitism, mating from the better half and
/// 45/45 crossover with a 10% fresh-duty share.
#[derive(Debug, Clone, Default)]
pub struct EvolutionLauncherBuilder {
    elitism: Option<ElitistSelection>,
    mating_pool: Option<TruncationSelection>,
    crossover: Option<CrossoverRates>,
}

impl EvolutionLauncherBuilder {
    pub fn new() -> Self {
        Self {
            elitism: None,
            mating_pool: None,
            crossover: None,
        }
    }

    pub fn with_elitism(mut self, elitism: ElitistSelection) -> Self {
        self.elitism = Some(elitism);
        self
    }

    pub fn with_mating_pool(mut self, mating_pool: TruncationSelection) -> Self {
        self.mating_pool = Some(mating_pool);
        self
    }

    pub fn with_crossover(mut self, crossover: CrossoverRates) -> Self {
        self.crossover = Some(crossover);
        self
    }

    pub fn build(self) -> EvolutionLauncher {
        EvolutionLauncher::new(
            self.elitism.unwrap_or_default(),
            self.mating_pool.unwrap_or_default(),
            self.crossover.unwrap_or_default(),
        )
    }
}
