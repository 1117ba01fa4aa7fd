use std::fmt::Debug;

use crate::board::Board;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection.
///
/// Implementations pick one board out of the current population using the
/// conflict counts computed for that population. Lower scores are better.
///
/// # Examples
///
/// ```
/// use nqueens_ga::board::Board;
/// use nqueens_ga::error::Result;
/// use nqueens_ga::rng::RandomNumberGenerator;
/// use nqueens_ga::selection::{SelectionStrategy, TournamentSelection};
///
/// fn main() -> Result<()> {
///     let population = vec![
///         Board::from_columns(&[0, 0, 0, 0])?,
///         Board::from_columns(&[1, 3, 0, 2])?,
///     ];
///     let fitness = vec![6, 0];
///     let mut rng = RandomNumberGenerator::from_seed(5);
///
///     let selection = TournamentSelection::new(2)?;
///     let parent = selection.select(&population, &fitness, &mut rng)?;
///     assert_eq!(parent.size(), 4);
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects one parent from `population`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    fn select<'a>(
        &self,
        population: &'a [Board],
        fitness: &[usize],
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Board>;
}
