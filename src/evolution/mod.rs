pub mod challenge;
pub mod launcher;
pub mod options;
pub mod schedule;

pub use challenge::{Challenge, PairConflicts, RowConflicts};
pub use launcher::{EvolutionResult, GeneticAlgorithm};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use schedule::{ProbabilitySchedule, CROSSOVER_FLOOR, MUTATION_FLOOR};
