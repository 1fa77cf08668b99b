//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, Cell};

/// Checks if the board is full (all cells marked).
///
/// A full board with no winning line is a draw.
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(|c| *c != Cell::Empty)
}
