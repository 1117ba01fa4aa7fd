//! Swap mutation.

use crate::board::Board;
use crate::rng::RandomNumberGenerator;

/// Swaps the columns of two rows drawn uniformly with replacement. Drawing
/// the same row twice leaves the board unchanged. Empty boards are ignored.
pub fn swap_mutation(board: &mut Board, rng: &mut RandomNumberGenerator) {
    let n = board.size();
    if n == 0 {
        return;
    }

    let first = rng.gen_index(n);
    let second = rng.gen_index(n);
    swap_at(board, first, second);
}

/// Swaps the columns of rows `first` and `second`.
///
/// # Panics
///
/// Panics if either row is out of range.
pub fn swap_at(board: &mut Board, first: usize, second: usize) {
    board.columns_mut().swap(first, second);
}
