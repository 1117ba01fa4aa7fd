//! # Challenge
//!
//! A `Challenge` scores a board by counting its conflicts. Lower is better and
//! zero means the board is a valid N-Queens placement.
//!
//! Two conflict measures are provided. Both are zero exactly for valid boards,
//! but they shape the non-zero landscape differently, so a run sticks to the
//! one it was constructed with.
//!
//! ```rust
//! use nqueens_ga::board::Board;
//! use nqueens_ga::evolution::{Challenge, PairConflicts, RowConflicts};
//!
//! // Every queen sits on the main diagonal.
//! let board = Board::from_columns(&[0, 1, 2, 3]).unwrap();
//! assert_eq!(PairConflicts.score(&board), 6);
//! assert_eq!(RowConflicts.score(&board), 3);
//! ```

use crate::board::Board;

pub trait Challenge {
    fn score(&self, board: &Board) -> usize;
}

/// Counts every unordered pair of rows that shares a column or a diagonal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairConflicts;

/// Counts the rows that attack at least one later row.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowConflicts;

/// Returns true if the queens on `row_a` and `row_b` share a column or a
/// diagonal.
#[inline]
pub fn attacks(columns: &[usize], row_a: usize, row_b: usize) -> bool {
    let (col_a, col_b) = (columns[row_a], columns[row_b]);
    col_a == col_b || row_a.abs_diff(row_b) == col_a.abs_diff(col_b)
}

impl Challenge for PairConflicts {
    fn score(&self, board: &Board) -> usize {
        let columns = board.columns();
        let size = columns.len();
        (0..size)
            .map(|i| (i + 1..size).filter(|&j| attacks(columns, i, j)).count())
            .sum()
    }
}

impl Challenge for RowConflicts {
    fn score(&self, board: &Board) -> usize {
        let columns = board.columns();
        let size = columns.len();
        (0..size)
            .filter(|&i| (i + 1..size).any(|j| attacks(columns, i, j)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(columns: &[usize]) -> Board {
        Board::from_columns(columns).unwrap()
    }

    /// Brute-force validity check that does not share code with the challenges.
    fn is_solution(columns: &[usize]) -> bool {
        for i in 0..columns.len() {
            for j in 0..columns.len() {
                if i == j {
                    continue;
                }
                let dr = i as isize - j as isize;
                let dc = columns[i] as isize - columns[j] as isize;
                if dc == 0 || dr.abs() == dc.abs() {
                    return false;
                }
            }
        }
        true
    }

    /// Enumerates every board of the given size, duplicates included.
    fn all_boards(size: usize) -> Vec<Vec<usize>> {
        let mut boards = vec![Vec::new()];
        for _ in 0..size {
            boards = boards
                .into_iter()
                .flat_map(|prefix| {
                    (0..size).map(move |c| {
                        let mut next = prefix.clone();
                        next.push(c);
                        next
                    })
                })
                .collect();
        }
        boards
    }

    #[test]
    fn test_known_solution_scores_zero() {
        let eight = board(&[0, 4, 7, 5, 2, 6, 1, 3]);
        assert_eq!(PairConflicts.score(&eight), 0);
        assert_eq!(RowConflicts.score(&eight), 0);
    }

    #[test]
    fn test_same_column_pairs() {
        let b = board(&[0, 0, 0]);
        assert_eq!(PairConflicts.score(&b), 3);
        assert_eq!(RowConflicts.score(&b), 2);
    }

    #[test]
    fn test_anti_diagonal() {
        let b = board(&[3, 2, 1, 0]);
        assert_eq!(PairConflicts.score(&b), 6);
        assert_eq!(RowConflicts.score(&b), 3);
    }

    #[test]
    fn test_trivial_sizes() {
        assert_eq!(PairConflicts.score(&Board::empty()), 0);
        assert_eq!(PairConflicts.score(&board(&[0])), 0);
        assert_eq!(RowConflicts.score(&board(&[0])), 0);
    }

    #[test]
    fn test_zero_iff_valid_exhaustive() {
        for size in 1..=6 {
            let mut solutions = 0;
            for columns in all_boards(size) {
                let b = board(&columns);
                let valid = is_solution(&columns);
                assert_eq!(PairConflicts.score(&b) == 0, valid, "{:?}", columns);
                assert_eq!(RowConflicts.score(&b) == 0, valid, "{:?}", columns);
                if valid {
                    solutions += 1;
                }
            }
            let expected = [1, 0, 0, 2, 10, 4][size - 1];
            assert_eq!(solutions, expected, "solutions for size {}", size);
        }
    }

    #[test]
    fn test_row_conflicts_never_exceed_pair_conflicts() {
        for columns in all_boards(5) {
            let b = board(&columns);
            assert!(RowConflicts.score(&b) <= PairConflicts.score(&b));
        }
    }

    #[test]
    fn test_invariant_under_board_reflections() {
        let samples: [&[usize]; 4] = [
            &[1, 1, 3, 0, 2],
            &[0, 1, 2, 3, 4, 5],
            &[5, 0, 0, 3, 1, 2],
            &[2, 4, 1, 3, 0, 6, 5],
        ];
        for columns in samples {
            let n = columns.len();
            let original = board(columns);

            // Reversing the row order.
            let flipped_rows: Vec<usize> = columns.iter().rev().copied().collect();
            // Mirroring every column.
            let mirrored: Vec<usize> = columns.iter().map(|&c| n - 1 - c).collect();

            for reflected in [flipped_rows, mirrored] {
                let reflected = board(&reflected);
                assert_eq!(PairConflicts.score(&original), PairConflicts.score(&reflected));
            }
        }
    }
}
