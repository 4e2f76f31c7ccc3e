use std::time::Duration;

use rostergen::{
    breeding::random_schedule,
    error::RosterError,
    evolution::{
        EvolutionLauncher, EvolutionOptions, GenerationReport, LogLevel, StopReason, Termination,
    },
    rng::RandomNumberGenerator,
    roster::Schedule,
    selection::sort_by_fitness,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn sorted_population(size: usize, seed: u64) -> Vec<Schedule> {
    let mut rng = RandomNumberGenerator::from_seed(seed);
    let mut population: Vec<Schedule> = (0..size).map(|_| random_schedule(&mut rng)).collect();
    sort_by_fitness(&mut population);
    population
}

fn capped(population_size: usize, generations: usize) -> EvolutionOptions {
    EvolutionOptions::builder()
        .population_size(population_size)
        .termination(Termination::default().with_max_generations(generations))
        .build()
}

#[test]
fn test_elite_is_carried_over_unchanged() {
    let launcher = EvolutionLauncher::default();
    let current = sorted_population(100, 1);
    let mut rng = RandomNumberGenerator::from_seed(2);

    let next = launcher.next_generation(&current, &mut rng, 0).unwrap();

    assert_eq!(next.len(), current.len());
    assert_eq!(next[..10], current[..10]);
}

#[test]
fn test_population_size_is_invariant() {
    let launcher = EvolutionLauncher::default();
    let mut population = sorted_population(37, 3);
    let mut rng = RandomNumberGenerator::from_seed(4);

    for _ in 0..25 {
        population = launcher.next_generation(&population, &mut rng, 16).unwrap();
        assert_eq!(population.len(), 37);
        sort_by_fitness(&mut population);
    }
}

#[test]
fn test_next_generation_of_empty_population() {
    let launcher = EvolutionLauncher::default();
    let mut rng = RandomNumberGenerator::from_seed(0);

    let result = launcher.next_generation(&[], &mut rng, 0);
    assert!(matches!(result, Err(RosterError::EmptyPopulation)));
}

#[test]
fn test_search_improves_on_random_rosters() {
    init_tracing();
    let mut options = capped(100, 200);
    options.set_log_level(LogLevel::Minimal);
    let mut rng = RandomNumberGenerator::from_seed(42);

    let result = EvolutionLauncher::default()
        .evolve(&options, &mut rng)
        .unwrap();

    let initial = result.fitness_history[0];
    assert!(result.best.fitness() < initial);
    assert_eq!(result.best.fitness(), *result.fitness_history.last().unwrap());
    if !result.converged() {
        assert_eq!(result.stop_reason, StopReason::GenerationLimit);
        assert_eq!(result.generations, 200);
    }
}

#[test]
fn test_same_seed_same_result_regardless_of_parallelism() {
    let run = |num_threads: usize, parallel_threshold: usize| {
        let options = EvolutionOptions::builder()
            .population_size(60)
            .termination(Termination::default().with_max_generations(30))
            .num_threads(num_threads)
            .parallel_threshold(parallel_threshold)
            .build();
        let mut rng = RandomNumberGenerator::from_seed(7);
        EvolutionLauncher::default()
            .evolve(&options, &mut rng)
            .unwrap()
    };

    let sequential = run(1, usize::MAX);
    let parallel = run(4, 0);

    assert_eq!(sequential.best, parallel.best);
    assert_eq!(sequential.fitness_history, parallel.fitness_history);
    assert_eq!(sequential.generations, parallel.generations);
}

#[test]
fn test_time_limit_stops_an_unreachable_target() {
    // No roster scores below zero, so only the time cap can end this search.
    let options = EvolutionOptions::builder()
        .population_size(20)
        .termination(Termination::until_fitness_below(0).with_time_limit(Duration::ZERO))
        .build();
    let mut rng = RandomNumberGenerator::from_seed(11);

    let result = EvolutionLauncher::default()
        .evolve(&options, &mut rng)
        .unwrap();

    assert_eq!(result.stop_reason, StopReason::TimeLimit);
    assert_eq!(result.generations, 0);
    assert!(!result.converged());
}

#[test]
fn test_verbose_logging_and_observer() {
    init_tracing();
    let mut options = capped(20, 3);
    options.set_log_level(LogLevel::Verbose);
    let mut rng = RandomNumberGenerator::from_seed(13);
    let mut reports: Vec<GenerationReport> = Vec::new();

    let result = EvolutionLauncher::default()
        .evolve_with(&options, &mut rng, |report| reports.push(*report))
        .unwrap();

    assert_eq!(reports.len(), result.generations + 1);
    assert_eq!(reports.last().unwrap().best_fitness, result.best.fitness());
}

#[test]
fn test_invalid_options_are_rejected() {
    let mut rng = RandomNumberGenerator::new();

    let result = EvolutionLauncher::default().evolve(&capped(1, 10), &mut rng);
    match result {
        Err(RosterError::Configuration(msg)) => {
            assert!(msg.contains("Population size must be at least 2"));
        }
        _ => panic!("Expected Configuration error"),
    }

    let options = EvolutionOptions::builder().num_threads(0).build();
    assert!(EvolutionLauncher::default()
        .evolve(&options, &mut rng)
        .is_err());
}
