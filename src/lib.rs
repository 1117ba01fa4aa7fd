//! A genetic algorithm that searches for a placement of N non-attacking
//! queens on an N×N board.
//!
//! ```rust
//! use nqueens_ga::{EvolutionOptions, GeneticAlgorithm, RandomNumberGenerator};
//!
//! let options = EvolutionOptions::builder()
//!     .board_size(6)
//!     .population_size(100)
//!     .num_generations(200)
//!     .build();
//! let ga = GeneticAlgorithm::new(options).unwrap();
//! let result = ga.run(&mut RandomNumberGenerator::from_seed(1)).unwrap();
//!
//! match result.solution() {
//!     Some(board) => print!("{}", board),
//!     None => println!("no solution, {} conflicts left", result.best_score),
//! }
//! ```

pub mod board;
pub mod error;
pub mod evolution;
pub mod operators;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{EvolutionOptions, EvolutionResult, GeneticAlgorithm};
pub use rng::RandomNumberGenerator;
