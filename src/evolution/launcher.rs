use tracing::{debug, info};

use super::{
    challenge::{Challenge, PairConflicts},
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    board::Board,
    error::{GeneticError, OptionExt, Result},
    rng::RandomNumberGenerator,
    selection::TournamentSelection,
    strategy::{BreedStrategy, GenerationalStrategy, Rates},
};

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionResult {
    /// The solution, or [`Board::empty`] when the budget ran out.
    pub board: Board,
    /// Generations evolved before returning.
    pub generations: usize,
    /// Best board of the last evaluated population.
    pub best: Board,
    /// Conflicts left on `best`.
    pub best_score: usize,
}

impl EvolutionResult {
    pub fn is_solved(&self) -> bool {
        !self.board.is_empty()
    }

    /// The solution, if one was found.
    pub fn solution(&self) -> Option<&Board> {
        self.is_solved().then_some(&self.board)
    }
}

/// Runs the generational search for a conflict-free board.
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm<Strategy = GenerationalStrategy, Chall = PairConflicts>
where
    Strategy: BreedStrategy,
    Chall: Challenge,
{
    options: EvolutionOptions,
    strategy: Strategy,
    challenge: Chall,
}

impl GeneticAlgorithm {
    /// Creates a search with tournament selection sized by `options` and the
    /// pair-counting fitness.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `options` fail validation.
    pub fn new(options: EvolutionOptions) -> Result<Self> {
        let selection = TournamentSelection::new(options.get_tournament_size())?;
        Self::with_parts(options, GenerationalStrategy::new(selection), PairConflicts)
    }
}

impl<Strategy, Chall> GeneticAlgorithm<Strategy, Chall>
where
    Strategy: BreedStrategy,
    Chall: Challenge,
{
    /// Creates a search from explicit parts.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `options` fail validation.
    pub fn with_parts(options: EvolutionOptions, strategy: Strategy, challenge: Chall) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            strategy,
            challenge,
        })
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Operator probabilities in effect during `generation`.
    pub fn rates_at(&self, generation: usize) -> Rates {
        let max = self.options.get_num_generations();
        Rates {
            crossover: self.options.get_crossover().at(generation, max),
            mutation: self.options.get_mutation().at(generation, max),
        }
    }

    /// Builds `population_size` random boards.
    pub fn initial_population(&self, rng: &mut RandomNumberGenerator) -> Vec<Board> {
        let size = self.options.get_board_size();
        (0..self.options.get_population_size())
            .map(|_| Board::random(size, rng))
            .collect()
    }

    /// Scores every board of `population`.
    pub fn evaluate(&self, population: &[Board]) -> Vec<usize> {
        population.iter().map(|b| self.challenge.score(b)).collect()
    }

    /// Evolves populations until a board without conflicts appears or the
    /// generation budget is spent.
    ///
    /// # Returns
    ///
    /// An `EvolutionResult` whose `board` is the first conflict-free board of
    /// the first generation that contains one, or the empty sentinel board on
    /// exhaustion. Running out of generations is not an error.
    ///
    /// # Errors
    ///
    /// This method will return an error if breeding fails.
    pub fn run(&self, rng: &mut RandomNumberGenerator) -> Result<EvolutionResult> {
        let max_generations = self.options.get_num_generations();
        let population_size = self.options.get_population_size();

        let mut population = self.initial_population(rng);
        let mut fitness = self.evaluate(&population);
        let (mut best_idx, mut best_score) = best_of(&fitness)?;

        for generation in 0..max_generations {
            let rates = self.rates_at(generation);

            population = self
                .strategy
                .breed(&population, &fitness, population_size, rates, rng)
                .map_err(|e| {
                    GeneticError::Evolution(format!(
                        "Failed to breed generation {}: {}",
                        generation + 1,
                        e
                    ))
                })?;
            fitness = self.evaluate(&population);
            (best_idx, best_score) = best_of(&fitness)?;

            match self.options.get_log_level() {
                LogLevel::Verbose => debug!(
                    generation = generation + 1,
                    best_score,
                    crossover = rates.crossover,
                    mutation = rates.mutation,
                    "best board:\n{}",
                    population[best_idx]
                ),
                LogLevel::Minimal => debug!(generation = generation + 1, best_score),
                LogLevel::None => {}
            }

            if best_score == 0 {
                info!(generation = generation + 1, "solution found");
                let board = population.swap_remove(best_idx);
                return Ok(EvolutionResult {
                    best: board.clone(),
                    board,
                    generations: generation + 1,
                    best_score,
                });
            }
        }

        info!(
            generations = max_generations,
            best_score, "generation budget exhausted without a solution"
        );
        Ok(EvolutionResult {
            board: Board::empty(),
            generations: max_generations,
            best: population.swap_remove(best_idx),
            best_score,
        })
    }
}

/// Index and score of the lowest score, first one on ties.
fn best_of(fitness: &[usize]) -> Result<(usize, usize)> {
    fitness
        .iter()
        .copied()
        .enumerate()
        .min_by_key(|&(_, score)| score)
        .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::{ProbabilitySchedule, RowConflicts};

    fn options(board_size: usize, generations: usize) -> EvolutionOptions {
        EvolutionOptions::builder()
            .board_size(board_size)
            .population_size(50)
            .num_generations(generations)
            .build()
    }

    #[test]
    fn test_best_of_prefers_first_minimum() {
        assert_eq!(best_of(&[3, 1, 4, 1, 5]).unwrap(), (1, 1));
        assert_eq!(best_of(&[2]).unwrap(), (0, 2));
        assert!(matches!(best_of(&[]), Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_new_rejects_invalid_options() {
        let result = GeneticAlgorithm::new(EvolutionOptions::builder().population_size(0).build());
        match result {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("Population size cannot be zero"))
            }
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_rates_follow_schedule() {
        let ga = GeneticAlgorithm::new(options(8, 100)).unwrap();
        let first = ga.rates_at(0);
        assert_eq!(first.crossover, 0.7);
        assert_eq!(first.mutation, 0.1);

        let last = ga.rates_at(100);
        assert_eq!(last.crossover, 0.1);
        assert_eq!(last.mutation, 0.01);
    }

    #[test]
    fn test_initial_population_shape() {
        let ga = GeneticAlgorithm::new(options(7, 10)).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(4);
        let population = ga.initial_population(&mut rng);
        assert_eq!(population.len(), 50);
        assert!(population.iter().all(|b| b.size() == 7));
        assert_eq!(ga.evaluate(&population).len(), 50);
    }

    #[test]
    fn test_single_queen_solves_in_first_generation() {
        let ga = GeneticAlgorithm::new(options(1, 10)).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);
        let result = ga.run(&mut rng).unwrap();

        assert!(result.is_solved());
        assert_eq!(result.generations, 1);
        assert_eq!(result.board.columns(), &[0]);
        assert_eq!(result.solution(), Some(&result.board));
    }

    #[test]
    fn test_zero_generations_exhausts_immediately() {
        let ga = GeneticAlgorithm::new(options(4, 0)).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);
        let result = ga.run(&mut rng).unwrap();

        assert!(!result.is_solved());
        assert!(result.board.is_empty());
        assert_eq!(result.generations, 0);
        assert_eq!(result.best.size(), 4);
        assert_eq!(result.best_score, PairConflicts.score(&result.best));
    }

    #[test]
    fn test_unsolvable_sizes_exhaust_budget() {
        for size in [2, 3] {
            let ga = GeneticAlgorithm::new(options(size, 10)).unwrap();
            let mut rng = RandomNumberGenerator::from_seed(size as u64);
            let result = ga.run(&mut rng).unwrap();

            assert!(result.board.is_empty());
            assert_eq!(result.solution(), None);
            assert_eq!(result.generations, 10);
            assert!(result.best_score > 0);
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let ga = GeneticAlgorithm::new(options(6, 40)).unwrap();
        let first = ga.run(&mut RandomNumberGenerator::from_seed(77)).unwrap();
        let second = ga.run(&mut RandomNumberGenerator::from_seed(77)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_row_conflicts_challenge() {
        let mut opts = options(5, 300);
        opts.set_mutation(ProbabilitySchedule::constant(0.3));
        let strategy = GenerationalStrategy::<TournamentSelection>::default();
        let ga = GeneticAlgorithm::with_parts(opts, strategy, RowConflicts).unwrap();

        let mut solved = false;
        for seed in 0..5 {
            let result = ga.run(&mut RandomNumberGenerator::from_seed(seed)).unwrap();
            if let Some(board) = result.solution() {
                assert_eq!(RowConflicts.score(board), 0);
                assert_eq!(PairConflicts.score(board), 0);
                solved = true;
            }
        }
        assert!(solved);
    }
}
