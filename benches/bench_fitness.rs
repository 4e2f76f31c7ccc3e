use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rayon::prelude::*;

use rostergen::{
    breeding::{mate, random_schedule, CrossoverRates},
    fitness,
    rng::RandomNumberGenerator,
    roster::Schedule,
};

fn random_population(size: usize) -> Vec<Schedule> {
    let mut rng = RandomNumberGenerator::from_seed(1);
    (0..size).map(|_| random_schedule(&mut rng)).collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness_evaluation");
    for size in [10, 100, 1000].iter() {
        let population = random_population(*size);

        group.bench_with_input(
            BenchmarkId::new("sequential", size),
            &population,
            |b, population| {
                b.iter(|| {
                    population
                        .iter()
                        .map(|schedule| fitness::evaluate(black_box(schedule.grid())))
                        .sum::<u32>()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", size),
            &population,
            |b, population| {
                b.iter(|| {
                    population
                        .par_iter()
                        .map(|schedule| fitness::evaluate(black_box(schedule.grid())))
                        .sum::<u32>()
                })
            },
        );
    }
    group.finish();
}

fn bench_mate(c: &mut Criterion) {
    let population = random_population(2);
    let rates = CrossoverRates::default();
    let mut rng = RandomNumberGenerator::from_seed(2);

    c.bench_function("mate", |b| {
        b.iter(|| {
            mate(
                black_box(&population[0]),
                black_box(&population[1]),
                &rates,
                &mut rng,
            )
        })
    });
}

criterion_group!(benches, bench_evaluate, bench_mate);
criterion_main!(benches);
