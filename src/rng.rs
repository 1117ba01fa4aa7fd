//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for a
//! run. It wraps `rand`'s `StdRng`; the caller owns one instance and threads it
//! through initialization, selection, crossover and mutation.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_ga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let row = rng.gen_index(8);
//! assert!(row < 8);
//!
//! let p = rng.gen_probability();
//! assert!((0.0..1.0).contains(&p));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides the draws the
/// solver needs.
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

    /// Returns a uniformly distributed index in `[0, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Returns a uniformly distributed index in `[lower, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty.
    pub fn gen_index_between(&mut self, lower: usize, upper: usize) -> usize {
        self.rng.gen_range(lower..upper)
    }

    /// Returns a uniformly distributed value in `[0, 1)`.
    pub fn gen_probability(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns `true` with the given probability.
    ///
    /// Probabilities at or below zero never fire, at or above one always fire.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.gen_probability() < probability
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
