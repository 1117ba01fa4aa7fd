//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the configuration of one search: board
//! size, population size, generation budget, crossover and mutation schedules,
//! tournament size, and how much progress to log.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_ga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Fluent construction
//! let options = EvolutionOptions::builder()
//!     .board_size(8)
//!     .population_size(200)
//!     .num_generations(500)
//!     .crossover_probability(0.7)
//!     .mutation_probability(0.1)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert!(options.validate().is_ok());
//!
//! // Presets mirroring the two classic configurations
//! let baseline = EvolutionOptions::baseline(8);
//! let refined = EvolutionOptions::refined(8);
//! assert_eq!(baseline.get_tournament_size(), 5);
//! assert_eq!(refined.get_tournament_size(), 500);
//! ```
//!
//! ## LogLevel
//!
//! - `Verbose`: logs the best score of every generation together with its board.
//! - `Minimal`: logs the best score of every generation.
//! - `None`: only the final outcome is logged.

use super::schedule::{ProbabilitySchedule, CROSSOVER_FLOOR, MUTATION_FLOOR};
use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    board_size: usize,
    population_size: usize,
    num_generations: usize,
    crossover: ProbabilitySchedule,
    mutation: ProbabilitySchedule,
    tournament_size: usize,
    log_level: LogLevel,
}

impl EvolutionOptions {
    pub fn new(
        board_size: usize,
        population_size: usize,
        num_generations: usize,
        crossover: ProbabilitySchedule,
        mutation: ProbabilitySchedule,
        tournament_size: usize,
        log_level: LogLevel,
    ) -> Self {
        Self {
            board_size,
            population_size,
            num_generations,
            crossover,
            mutation,
            tournament_size,
            log_level,
        }
    }

    /// Tournament of 5 and constant probabilities.
    pub fn baseline(board_size: usize) -> Self {
        Self::builder()
            .board_size(board_size)
            .tournament_size(5)
            .constant_rates()
            .build()
    }

    /// Tournament of 500 and probabilities decaying linearly to their floors.
    pub fn refined(board_size: usize) -> Self {
        Self::builder()
            .board_size(board_size)
            .tournament_size(500)
            .decaying_rates()
            .build()
    }

    /// Rejects configurations the search cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the board, population or
    /// tournament size is zero, or a probability lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(GeneticError::Configuration(
                "Board size cannot be zero".to_string(),
            ));
        }

        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.tournament_size == 0 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        self.crossover.validate("Crossover")?;
        self.mutation.validate("Mutation")
    }

    pub fn get_board_size(&self) -> usize {
        self.board_size
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_crossover(&self) -> &ProbabilitySchedule {
        &self.crossover
    }

    pub fn get_mutation(&self) -> &ProbabilitySchedule {
        &self.mutation
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    pub fn set_board_size(&mut self, board_size: usize) {
        self.board_size = board_size;
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_crossover(&mut self, crossover: ProbabilitySchedule) {
        self.crossover = crossover;
    }

    pub fn set_mutation(&mut self, mutation: ProbabilitySchedule) {
        self.mutation = mutation;
    }

    pub fn set_tournament_size(&mut self, tournament_size: usize) {
        self.tournament_size = tournament_size;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for `EvolutionOptions`.
///
/// Probabilities given with `crossover_probability`/`mutation_probability`
/// decay toward their floors unless `constant_rates` is selected.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    board_size: Option<usize>,
    population_size: Option<usize>,
    num_generations: Option<usize>,
    crossover_probability: Option<f64>,
    mutation_probability: Option<f64>,
    decay: Option<bool>,
    tournament_size: Option<usize>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn board_size(mut self, value: usize) -> Self {
        self.board_size = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.crossover_probability = Some(value);
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    /// Keeps both probabilities fixed for the whole run.
    pub fn constant_rates(mut self) -> Self {
        self.decay = Some(false);
        self
    }

    /// Decays both probabilities linearly toward their floors.
    pub fn decaying_rates(mut self) -> Self {
        self.decay = Some(true);
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let crossover = self.crossover_probability.unwrap_or(0.7);
        let mutation = self.mutation_probability.unwrap_or(0.1);
        let (crossover, mutation) = if self.decay.unwrap_or(true) {
            (
                ProbabilitySchedule::linear(crossover, CROSSOVER_FLOOR),
                ProbabilitySchedule::linear(mutation, MUTATION_FLOOR),
            )
        } else {
            (
                ProbabilitySchedule::constant(crossover),
                ProbabilitySchedule::constant(mutation),
            )
        };

        EvolutionOptions {
            board_size: self.board_size.unwrap_or(8),
            population_size: self.population_size.unwrap_or(1000),
            num_generations: self.num_generations.unwrap_or(10_000),
            crossover,
            mutation,
            tournament_size: self.tournament_size.unwrap_or(5),
            log_level: self.log_level.unwrap_or(LogLevel::None),
        }
    }
}
