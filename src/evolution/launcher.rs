use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info, instrument};

use super::{
    builder::EvolutionLauncherBuilder,
    options::{EvolutionOptions, LogLevel},
    termination::StopReason,
};
use crate::{
    breeding::{mate, random_schedule, CrossoverRates},
    error::{Result, RosterError},
    rng::RandomNumberGenerator,
    roster::Schedule,
    selection::{sort_by_fitness, ElitistSelection, TruncationSelection},
};

/// Progress of one evaluated generation, passed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of completed breeding cycles; 0 is the random initial population.
    pub generation: usize,
    /// Fitness of the best roster in this generation.
    pub best_fitness: u32,
}

/// Represents the result of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The best roster of the final generation.
    pub best: Schedule,
    /// Number of completed generations.
    pub generations: usize,
    /// Why the search ended.
    pub stop_reason: StopReason,
    /// Best fitness of every evaluated generation, starting with generation 0.
    pub fitness_history: Vec<u32>,
    /// Wall-clock time spent in the search.
    pub elapsed: Duration,
}

impl EvolutionResult {
    /// Whether the search ended by reaching the target fitness rather than a cap.
    pub fn converged(&self) -> bool {
        self.stop_reason == StopReason::TargetReached
    }
}

/// Runs the roster search with a fixed set of genetic operators.
///
/// Every generation the population is sorted best first, the elite prefix is
/// copied over unchanged and the remaining slots are filled with children of
/// parents drawn from the mating pool. Each slot is built by its own worker
/// with its own random stream, so a run is reproducible from the seed of the
/// generator passed in, whatever the thread count.
///
/// # Example
///
/// ```rust
/// use rostergen::evolution::{EvolutionLauncher, EvolutionOptions, Termination};
/// use rostergen::rng::RandomNumberGenerator;
///
/// let options = EvolutionOptions::builder()
///     .population_size(40)
///     .termination(Termination::default().with_max_generations(20))
///     .build();
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let result = EvolutionLauncher::default().evolve(&options, &mut rng).unwrap();
///
/// assert!(result.generations <= 20);
/// assert_eq!(result.fitness_history.len(), result.generations + 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvolutionLauncher {
    elitism: ElitistSelection,
    mating_pool: TruncationSelection,
    crossover: CrossoverRates,
}

impl EvolutionLauncher {
    /// Creates a new `EvolutionLauncher` with the given operators.
    pub fn new(
        elitism: ElitistSelection,
        mating_pool: TruncationSelection,
        crossover: CrossoverRates,
    ) -> Self {
        Self {
            elitism,
            mating_pool,
            crossover,
        }
    }

    pub fn builder() -> EvolutionLauncherBuilder {
        EvolutionLauncherBuilder::new()
    }

    pub fn elitism(&self) -> &ElitistSelection {
        &self.elitism
    }

    pub fn mating_pool(&self) -> &TruncationSelection {
        &self.mating_pool
    }

    pub fn crossover(&self) -> &CrossoverRates {
        &self.crossover
    }

    /// Runs the search until the stopping policy in `options` fires.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options or operators are invalid
    /// - The mating pool would be empty for the configured population size
    /// - A dedicated thread pool was requested and could not be built
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        self.evolve_with(options, rng, |_| {})
    }

    /// Runs the search and hands a [`GenerationReport`] to `observer` after
    /// every evaluated generation, including the initial one.
    ///
    /// # Errors
    ///
    /// See [`EvolutionLauncher::evolve`].
    #[instrument(
        skip_all,
        fields(
            population_size = options.get_population_size(),
            num_threads = ?options.get_num_threads()
        )
    )]
    pub fn evolve_with<F>(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
        observer: F,
    ) -> Result<EvolutionResult>
    where
        F: FnMut(&GenerationReport) + Send,
    {
        self.validate(options)?;

        match options.get_num_threads() {
            Some(num_threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .build()?;
                pool.install(|| self.run(options, rng, observer))
            }
            None => self.run(options, rng, observer),
        }
    }

    fn validate(&self, options: &EvolutionOptions) -> Result<()> {
        options.validate()?;
        self.elitism.validate()?;
        self.mating_pool.validate()?;
        self.crossover.validate()?;

        if self.mating_pool.pool_size(options.get_population_size()) == 0 {
            return Err(RosterError::Configuration(format!(
                "Mating pool of {}% is empty for a population of {}",
                self.mating_pool.percent(),
                options.get_population_size()
            )));
        }
        Ok(())
    }

    /// Builds the generation that follows `sorted`, a population ordered best
    /// first: the elite prefix unchanged, then one child per remaining slot.
    /// The result has the same size as `sorted` and is not sorted.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::EmptyPopulation`] if `sorted` is empty or its
    /// mating pool is.
    pub fn next_generation(
        &self,
        sorted: &[Schedule],
        rng: &mut RandomNumberGenerator,
        parallel_threshold: usize,
    ) -> Result<Vec<Schedule>> {
        let mut next_generation = self.elitism.select(sorted)?;

        let seeds = rng.stream_seeds(sorted.len() - next_generation.len());
        let children = build_slots(seeds, parallel_threshold, |slot_rng| {
            let (parent1, parent2) = self.mating_pool.select(sorted, slot_rng)?;
            Ok(mate(parent1, parent2, &self.crossover, slot_rng))
        })?;
        next_generation.extend(children);

        Ok(next_generation)
    }

    fn run<F>(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
        mut observer: F,
    ) -> Result<EvolutionResult>
    where
        F: FnMut(&GenerationReport),
    {
        let started = Instant::now();
        let population_size = options.get_population_size();
        let termination = options.get_termination();
        let elite_count = self.elitism.elite_count(population_size);
        let parallel_threshold = options.get_parallel_threshold();

        info!(
            population_size,
            elite_count,
            unbounded = termination.is_unbounded(),
            "Starting roster search"
        );

        let seeds = rng.stream_seeds(population_size);
        let mut population = build_slots(seeds, parallel_threshold, |slot_rng| {
            Ok(random_schedule(slot_rng))
        })?;
        sort_by_fitness(&mut population);

        let mut generation = 0;
        let mut fitness_history: Vec<u32> = Vec::new();

        let stop_reason = loop {
            let best_fitness = population[0].fitness();
            let improved = fitness_history
                .last()
                .map_or(true, |&previous| best_fitness < previous);
            fitness_history.push(best_fitness);

            let report = GenerationReport {
                generation,
                best_fitness,
            };
            log_generation(options.get_log_level(), &report, improved, &population[0]);
            observer(&report);

            if let Some(reason) = termination.check(best_fitness, generation, started.elapsed()) {
                break reason;
            }

            let next_generation = self.next_generation(&population, rng, parallel_threshold)?;
            debug_assert_eq!(next_generation.len(), population_size);
            population = next_generation;
            sort_by_fitness(&mut population);
            generation += 1;
        };

        let best = population[0];
        let elapsed = started.elapsed();

        info!(
            generations = generation,
            best_fitness = best.fitness(),
            reason = %stop_reason,
            elapsed_ms = elapsed.as_millis() as u64,
            "Roster search finished"
        );

        Ok(EvolutionResult {
            best,
            generations: generation,
            stop_reason,
            fitness_history,
            elapsed,
        })
    }
}

/// Builds one roster per seed. Each slot gets its own generator and writes
/// only its own index, so slots are built in parallel without locking.
fn build_slots<F>(seeds: Vec<u64>, parallel_threshold: usize, build: F) -> Result<Vec<Schedule>>
where
    F: Fn(&mut RandomNumberGenerator) -> Result<Schedule> + Send + Sync,
{
    if seeds.len() >= parallel_threshold {
        seeds
            .into_par_iter()
            .map(|seed| build(&mut RandomNumberGenerator::from_seed(seed)))
            .collect()
    } else {
        seeds
            .into_iter()
            .map(|seed| build(&mut RandomNumberGenerator::from_seed(seed)))
            .collect()
    }
}

fn log_generation(level: &LogLevel, report: &GenerationReport, improved: bool, best: &Schedule) {
    match level {
        LogLevel::Verbose => {
            info!(
                generation = report.generation,
                best_fitness = report.best_fitness,
                "Generation evaluated"
            );
            debug!("Best roster:\n{}", best);
        }
        LogLevel::Minimal if improved => {
            info!(
                generation = report.generation,
                best_fitness = report.best_fitness,
                "Best fitness improved"
            );
        }
        LogLevel::Minimal | LogLevel::None => {}
    }
}
