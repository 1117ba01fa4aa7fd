//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for building
//! the next population from the current one, its conflict counts, and the operator
//! probabilities in effect for the generation.
pub mod generational;

use std::fmt::Debug;

use crate::{board::Board, error::Result, rng::RandomNumberGenerator};

/// Crossover and mutation probabilities for one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub crossover: f64,
    pub mutation: f64,
}

/// # BreedStrategy
///
/// Implementations replace the population wholesale: the returned vector is a
/// fresh set of boards and the input is left untouched.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds a new population.
    ///
    /// ## Parameters
    ///
    /// - `population`: The current population.
    /// - `fitness`: Conflict counts of `population`, index for index.
    /// - `size`: Number of boards to produce.
    /// - `rates`: Operator probabilities for this generation.
    /// - `rng`: The run's random number generator.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The population is empty
    /// - `fitness` does not match `population`
    fn breed(
        &self,
        population: &[Board],
        fitness: &[usize],
        size: usize,
        rates: Rates,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Board>>;
}

pub use generational::GenerationalStrategy;
