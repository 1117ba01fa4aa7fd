//! # Operators
//!
//! Crossover and mutation on boards. Both operators are unconditional; the
//! breeding strategy decides whether to apply them for a given child.

pub mod crossover;
pub mod mutation;

pub use crossover::{order_crossover, order_crossover_segment};
pub use mutation::{swap_at, swap_mutation};
