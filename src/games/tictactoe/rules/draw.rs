//! Full-board detection for tic-tac-toe.

use super::super::Board;

/// Checks if the board is full (all squares occupied).
///
/// A full board is only a draw when no line is complete, so callers check
/// for a winner first.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
