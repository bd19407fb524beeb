//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Win detection always runs before the
//! full-board check, so a line completed on the last empty cell is a win.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use super::{Board, TerminalStatus};
use tracing::instrument;

/// Classifies `board` as in progress, won, or drawn.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> TerminalStatus {
    if let Some(mark) = check_winner(board) {
        return mark.wins();
    }
    if is_full(board) {
        TerminalStatus::Draw
    } else {
        TerminalStatus::InProgress
    }
}
