//! # Board
//!
//! A `Board` is one candidate solution: `columns[row]` is the column of the
//! queen placed on `row`. Each row holds exactly one queen, so only column and
//! diagonal conflicts are possible. Duplicate columns are allowed and are
//! penalized by the fitness function rather than rejected here.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_ga::board::Board;
//!
//! let board = Board::from_columns(&[1, 3, 0, 2]).unwrap();
//! assert_eq!(board.size(), 4);
//! assert_eq!(board.render(), "#Q##\n###Q\nQ###\n##Q#\n");
//! ```
//!
//! A board of size zero is the failure sentinel returned when a run exhausts
//! its generation budget; check [`Board::is_empty`] before trusting a result.

use std::fmt;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Marker for the occupied square of a row.
pub const QUEEN: char = 'Q';
/// Marker for every other square.
pub const EMPTY: char = '#';

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    columns: Vec<usize>,
}

impl Board {
    /// Creates a board with `size` rows, each holding a uniformly random column
    /// in `[0, size)`.
    pub fn random(size: usize, rng: &mut RandomNumberGenerator) -> Self {
        let columns = (0..size).map(|_| rng.gen_index(size)).collect();
        Self { columns }
    }

    /// Creates a board holding a copy of `columns`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::OutOfBounds` if any column is not smaller than
    /// the number of rows.
    pub fn from_columns(columns: &[usize]) -> Result<Self> {
        let size = columns.len();
        if let Some((row, column)) = columns.iter().enumerate().find(|(_, &c)| c >= size) {
            return Err(GeneticError::OutOfBounds(format!(
                "column {} on row {} does not fit a board of size {}",
                column, row, size
            )));
        }

        Ok(Self {
            columns: columns.to_vec(),
        })
    }

    /// The size-zero board used to signal that no solution was found.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of rows (and columns) of the board.
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Mutable access to the placement. The board does not re-validate after
    /// the caller is done.
    pub fn columns_mut(&mut self) -> &mut [usize] {
        &mut self.columns
    }

    /// Renders the board as `size` lines of `size` markers, each line ending
    /// in a newline.
    pub fn render(&self) -> String {
        let size = self.size();
        let mut out = String::with_capacity(size * (size + 1));
        for &queen in &self.columns {
            out.extend((0..size).map(|col| if col == queen { QUEEN } else { EMPTY }));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_board_shape() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        for size in [1, 4, 8, 13] {
            let board = Board::random(size, &mut rng);
            assert_eq!(board.size(), size);
            assert!(board.columns().iter().all(|&c| c < size));
        }
    }

    #[test]
    fn test_random_board_of_size_zero_is_empty() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        assert!(Board::random(0, &mut rng).is_empty());
    }

    #[test]
    fn test_from_columns_copies_input() {
        let mut source = vec![0, 2, 1];
        let mut board = Board::from_columns(&source).unwrap();

        source[0] = 2;
        assert_eq!(board.columns(), &[0, 2, 1]);

        board.columns_mut()[1] = 0;
        assert_eq!(source, vec![2, 2, 1]);
    }

    #[test]
    fn test_from_columns_rejects_out_of_range() {
        let result = Board::from_columns(&[0, 3, 1]);
        assert!(matches!(result, Err(GeneticError::OutOfBounds(_))));
    }

    #[test]
    fn test_render_one_queen_per_line() {
        let columns = [4, 0, 3, 1, 2];
        let board = Board::from_columns(&columns).unwrap();
        let rendered = board.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), columns.len());
        for (row, line) in lines.iter().enumerate() {
            assert_eq!(line.chars().count(), columns.len());
            assert_eq!(line.matches(QUEEN).count(), 1);
            assert_eq!(line.chars().position(|c| c == QUEEN), Some(columns[row]));
        }
    }

    #[test]
    fn test_render_with_duplicate_columns() {
        let board = Board::from_columns(&[1, 1]).unwrap();
        assert_eq!(board.render(), "#Q\n#Q\n");
    }

    #[test]
    fn test_display_matches_render() {
        let board = Board::from_columns(&[0]).unwrap();
        assert_eq!(board.to_string(), "Q\n");
        assert_eq!(Board::empty().to_string(), "");
    }
}
