//! # Error Types
//!
//! This module defines the error type shared by every part of the solver.
//! Only invalid input and broken internal invariants are errors: running out
//! of generations without a solution is a regular outcome and is reported
//! through [`EvolutionResult`](crate::evolution::EvolutionResult) instead.
//!
//! ## Examples
//!
//! Validating options before a run:
//!
//! ```rust
//! use nqueens_ga::error::GeneticError;
//! use nqueens_ga::evolution::EvolutionOptions;
//!
//! let options = EvolutionOptions::builder().board_size(0).build();
//! match options.validate() {
//!     Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Board size")),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use nqueens_ga::error::{GeneticError, OptionExt};
//!
//! fn lowest(scores: &[usize]) -> nqueens_ga::error::Result<usize> {
//!     scores.iter().min().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(lowest(&[3, 1, 2]).unwrap(), 1);
//! assert!(lowest(&[]).is_err());
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Errors produced while configuring or running the solver.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an operation needs at least one board.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a board holds a column outside `[0, size)`.
    #[error("Bounds error: Board is outside of valid bounds - {0}")]
    OutOfBounds(String),

    /// Error that occurs when the evolution loop reaches an inconsistent state.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for solver operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use nqueens_ga::error::ResultExt;
///
/// fn parse_size(input: &str) -> nqueens_ga::error::Result<usize> {
///     input.trim().parse::<usize>().context("Board size must be a number")
/// }
///
/// assert_eq!(parse_size(" 8\n").unwrap(), 8);
/// assert!(parse_size("eight").is_err());
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error into a `GeneticError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using `err_fn`
    /// to build the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
