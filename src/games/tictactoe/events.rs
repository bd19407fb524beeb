//! Events crossing the boundary between the engine and its front end.

use super::{Mark, Move};
use serde::{Deserialize, Serialize};

/// Discrete input produced by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// A cell was chosen by the human whose turn it is.
    CellClicked {
        /// Row, 0-2.
        row: usize,
        /// Column, 0-2.
        col: usize,
    },
    /// Start a fresh game in the same mode.
    ResetRequested,
    /// Switch between two-player and single-player, then reset.
    ModeToggleRequested,
}

/// Feedback signals for sound or visual cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// A mark landed on the board.
    MovePlaced(Move),
    /// A mark completed a line.
    GameWon(Mark),
    /// The board filled without a line.
    GameDrawn,
}
