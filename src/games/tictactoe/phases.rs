//! Turn state machine phases.

use super::{Mark, TerminalStatus};
use serde::{Deserialize, Serialize};

/// Where the game stands between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for `Mark` to move.
    Turn(Mark),
    /// Play has ended. Never holds [`TerminalStatus::InProgress`].
    Terminal(TerminalStatus),
}

impl Phase {
    /// Phase at the start of every game.
    pub const START: Phase = Phase::Turn(Mark::First);

    /// Mark to move, if the game is still running.
    pub fn to_move(self) -> Option<Mark> {
        match self {
            Phase::Turn(mark) => Some(mark),
            Phase::Terminal(_) => None,
        }
    }

    /// Returns true once play has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Terminal(_))
    }

    /// Phase following a successful move by `mark`.
    pub(super) fn after_move(mark: Mark, status: TerminalStatus) -> Self {
        if status.is_terminal() {
            Phase::Terminal(status)
        } else {
            Phase::Turn(mark.opponent())
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Turn(mark) => write!(f, "{}'s turn", mark),
            Phase::Terminal(TerminalStatus::Draw) => write!(f, "Draw"),
            Phase::Terminal(status) => match status.winner() {
                Some(mark) => write!(f, "{} wins", mark),
                None => write!(f, "In progress"),
            },
        }
    }
}
