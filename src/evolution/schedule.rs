//! # ProbabilitySchedule
//!
//! Crossover and mutation probabilities are a pure function of the generation
//! index, so a run never mutates its configuration while it evolves.
//!
//! ```rust
//! use nqueens_ga::evolution::ProbabilitySchedule;
//!
//! let schedule = ProbabilitySchedule::linear(0.7, 0.1);
//! assert_eq!(schedule.at(0, 100), 0.7);
//! assert!((schedule.at(50, 100) - 0.4).abs() < 1e-12);
//! assert_eq!(schedule.at(100, 100), 0.1);
//! assert_eq!(schedule.at(250, 100), 0.1);
//! ```

use crate::error::{GeneticError, Result};

/// Floor reached by a decaying crossover probability.
pub const CROSSOVER_FLOOR: f64 = 0.1;
/// Floor reached by a decaying mutation probability.
pub const MUTATION_FLOOR: f64 = 0.01;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbabilitySchedule {
    /// The same probability for every generation.
    Constant(f64),
    /// Decays linearly from `initial` so that it would reach `floor` after the
    /// whole generation budget, and never goes below `floor`.
    Linear { initial: f64, floor: f64 },
}

impl ProbabilitySchedule {
    pub fn constant(probability: f64) -> Self {
        Self::Constant(probability)
    }

    pub fn linear(initial: f64, floor: f64) -> Self {
        Self::Linear { initial, floor }
    }

    /// Probability in effect during `generation` (zero-based) of a run that
    /// allows `max_generations`.
    pub fn at(&self, generation: usize, max_generations: usize) -> f64 {
        match *self {
            Self::Constant(probability) => probability,
            Self::Linear { initial, floor } => {
                if initial <= floor || max_generations == 0 {
                    return initial;
                }
                if generation >= max_generations {
                    return floor;
                }
                let progress = generation as f64 / max_generations as f64;
                (initial - (initial - floor) * progress).max(floor)
            }
        }
    }

    /// The probability used for the first generation.
    pub fn initial(&self) -> f64 {
        match *self {
            Self::Constant(probability) => probability,
            Self::Linear { initial, .. } => initial,
        }
    }

    /// Checks that every probability involved lies in `[0, 1]`.
    pub fn validate(&self, name: &str) -> Result<()> {
        let check = |label: &str, value: f64| {
            if value.is_finite() && (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(GeneticError::Configuration(format!(
                    "{} {} must be within [0, 1], got {}",
                    name, label, value
                )))
            }
        };

        match *self {
            Self::Constant(probability) => check("probability", probability),
            Self::Linear { initial, floor } => {
                check("probability", initial)?;
                check("floor", floor)
            }
        }
    }
}
