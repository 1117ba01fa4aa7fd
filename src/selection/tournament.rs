use crate::board::Board;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament draws `tournament_size` boards uniformly at random, with
/// replacement, and keeps the one with the fewest conflicts. Ties go to the
/// participant drawn first.
///
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (faster convergence,
///   higher risk of converging prematurely)
///
/// # Examples
///
/// ```
/// use nqueens_ga::board::Board;
/// use nqueens_ga::rng::RandomNumberGenerator;
/// use nqueens_ga::selection::{SelectionStrategy, TournamentSelection};
///
/// let population = vec![
///     Board::from_columns(&[0, 1, 2]).unwrap(),
///     Board::from_columns(&[0, 2, 1]).unwrap(),
/// ];
/// let fitness = vec![3, 2];
///
/// // With a large tournament the better board is all but certain to win.
/// let selection = TournamentSelection::new(64).unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let winner = selection.select(&population, &fitness, &mut rng).unwrap();
/// assert_eq!(winner.columns(), &[0, 2, 1]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Arguments
    ///
    /// * `tournament_size` - The number of draws per tournament. Must be at
    ///   least 1. A tournament size of 1 is equivalent to random selection.
    ///   Sizes larger than the population are allowed since draws repeat.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn with_tournament_size(mut self, tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        self.tournament_size = tournament_size;
        Ok(self)
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    fn run_tournament(&self, fitness: &[usize], rng: &mut RandomNumberGenerator) -> usize {
        let mut best_idx = rng.gen_index(fitness.len());

        for _ in 1..self.tournament_size {
            let idx = rng.gen_index(fitness.len());
            if fitness[idx] < fitness[best_idx] {
                best_idx = idx;
            }
        }

        best_idx
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 5 }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select<'a>(
        &self,
        population: &'a [Board],
        fitness: &[usize],
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Board> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if fitness.len() != population.len() {
            return Err(GeneticError::Configuration(format!(
                "Fitness vector length ({}) doesn't match population length ({})",
                fitness.len(),
                population.len()
            )));
        }

        Ok(&population[self.run_tournament(fitness, rng)])
    }
}
