//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct wraps the `rand` crate's `StdRng` and is the
//! only source of randomness in the optimizer. It is passed explicitly to every
//! operator instead of relying on ambient global state.
//!
//! ## Example
//!
//! ```rust
//! use rostergen::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let index = rng.gen_index(50);
//! assert!(index < 50);
//! ```
//!
//! ## Independent streams
//!
//! Parallel phases never share a generator. The coordinating thread draws one
//! seed per slot with [`RandomNumberGenerator::stream_seeds`] and each worker
//! builds its own generator from that seed:
//!
//! ```rust
//! use rostergen::rng::RandomNumberGenerator;
//!
//! let mut master = RandomNumberGenerator::from_seed(42);
//! let streams: Vec<RandomNumberGenerator> = master
//!     .stream_seeds(4)
//!     .into_iter()
//!     .map(RandomNumberGenerator::from_seed)
//!     .collect();
//! assert_eq!(streams.len(), 4);
//! ```

use rand::{
    distributions::{Distribution, Standard},
    rngs::StdRng,
    Rng, SeedableRng,
};

/// A wrapper around the `rand` crate's `StdRng` that provides the draws the
/// genetic operators need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a value from the standard distribution of `T`.
    ///
    /// Duties implement the standard distribution, so `rng.sample::<Duty>()`
    /// yields one of the four codes uniformly.
    pub fn sample<T>(&mut self) -> T
    where
        Standard: Distribution<T>,
    {
        self.rng.gen()
    }

    /// Returns a uniform index in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn gen_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }

    /// Returns a uniform integer in `[0, 100)`.
    pub fn gen_percent(&mut self) -> u32 {
        self.rng.gen_range(0..100)
    }

    /// Draws `num` seeds for independent child generators.
    pub fn stream_seeds(&mut self, num: usize) -> Vec<u64> {
        (0..num).map(|_| self.rng.gen()).collect()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
