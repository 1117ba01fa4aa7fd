//! Order crossover (OX) adapted to boards that may repeat columns.
//!
//! A segment of the first parent is copied verbatim; the remaining rows are
//! filled, left to right, with the second parent's columns that the child does
//! not hold yet, in the second parent's row order. Because a board is not a
//! strict permutation, that walk can run out of fresh columns before every
//! row is filled. Those rows keep the second parent's column for the same row.

use crate::board::Board;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Draws a segment `[start, end]` with `start <= end < n` and recombines the
/// parents around it.
///
/// # Errors
///
/// Returns an error if the parents differ in size or are empty.
pub fn order_crossover(
    parent1: &Board,
    parent2: &Board,
    rng: &mut RandomNumberGenerator,
) -> Result<Board> {
    let n = parent1.size();
    if n == 0 {
        return Err(GeneticError::Configuration(
            "Cannot cross over empty boards".to_string(),
        ));
    }

    let start = rng.gen_index(n);
    let end = rng.gen_index_between(start, n);
    order_crossover_segment(parent1, parent2, start, end)
}

/// Order crossover with an explicit segment `[start, end]` (inclusive).
///
/// # Examples
///
/// ```
/// use nqueens_ga::board::Board;
/// use nqueens_ga::operators::order_crossover_segment;
///
/// let p1 = Board::from_columns(&[0, 1, 2, 3, 4]).unwrap();
/// let p2 = Board::from_columns(&[4, 3, 2, 1, 0]).unwrap();
/// let child = order_crossover_segment(&p1, &p2, 1, 2).unwrap();
/// assert_eq!(child.columns(), &[4, 1, 2, 3, 0]);
/// ```
///
/// # Errors
///
/// Returns an error if the parents differ in size or the segment does not fit.
pub fn order_crossover_segment(
    parent1: &Board,
    parent2: &Board,
    start: usize,
    end: usize,
) -> Result<Board> {
    let n = parent1.size();
    if parent2.size() != n {
        return Err(GeneticError::Configuration(format!(
            "Parents must have equal size, got {} and {}",
            n,
            parent2.size()
        )));
    }
    if start > end || end >= n {
        return Err(GeneticError::OutOfBounds(format!(
            "segment [{}, {}] does not fit a board of size {}",
            start, end, n
        )));
    }

    let mut child: Vec<Option<usize>> = vec![None; n];
    let mut present = vec![false; n];

    for row in start..=end {
        let column = parent1.columns()[row];
        child[row] = Some(column);
        present[column] = true;
    }

    let mut cursor = 0;
    for &column in parent2.columns() {
        if present[column] {
            continue;
        }
        while cursor < n && child[cursor].is_some() {
            cursor += 1;
        }
        if cursor == n {
            break;
        }
        child[cursor] = Some(column);
        present[column] = true;
        cursor += 1;
    }

    let columns: Vec<usize> = child
        .into_iter()
        .zip(parent2.columns())
        .map(|(slot, &fallback)| slot.unwrap_or(fallback))
        .collect();

    Board::from_columns(&columns)
}
