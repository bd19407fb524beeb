//! First-class invariants for tic-tac-toe.
//!
//! Properties every reachable game state satisfies. The controller checks
//! them after each move in debug builds.

use super::controller::Snapshot;
use super::phases::Phase;
use super::rules::evaluate;
use super::{Board, Mark, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants, returning the descriptions of those that fail.
    fn check_all(state: &S) -> Result<(), Vec<&'static str>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<&'static str>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(I1::description());
        }

        if !I2::holds(state) {
            violations.push(I2::description());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn count(board: &Board, mark: Mark) -> usize {
    board
        .squares()
        .iter()
        .filter(|s| **s == Square::Occupied(mark))
        .count()
}

/// Invariant: X has placed as many marks as O, or one more.
pub struct BalancedMarksInvariant;

impl Invariant<Snapshot> for BalancedMarksInvariant {
    fn holds(state: &Snapshot) -> bool {
        let first = count(&state.board, Mark::First);
        let second = count(&state.board, Mark::Second);
        first == second || first == second + 1
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

/// Invariant: the phase is the one the board implies.
pub struct PhaseMatchesBoardInvariant;

impl Invariant<Snapshot> for PhaseMatchesBoardInvariant {
    fn holds(state: &Snapshot) -> bool {
        let status = evaluate(&state.board);
        if status.is_terminal() {
            return state.phase == Phase::Terminal(status);
        }
        let to_move = if count(&state.board, Mark::First) == count(&state.board, Mark::Second) {
            Mark::First
        } else {
            Mark::Second
        };
        state.phase == Phase::Turn(to_move)
    }

    fn description() -> &'static str {
        "Phase agrees with the board"
    }
}

/// All tic-tac-toe invariants as a composable set.
pub type GameInvariants = (BalancedMarksInvariant, PhaseMatchesBoardInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameMode, TerminalStatus};

    const X: Square = Square::Occupied(Mark::First);
    const O: Square = Square::Occupied(Mark::Second);
    const E: Square = Square::Empty;

    fn snapshot(squares: [Square; 9], phase: Phase) -> Snapshot {
        Snapshot {
            board: Board::from_squares(squares),
            phase,
            mode: GameMode::TwoPlayer,
            status: String::new(),
        }
    }

    #[test]
    fn test_holds_for_empty_game() {
        let state = snapshot([E; 9], Phase::START);
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_holds_after_win() {
        let state = snapshot(
            [X, X, X, O, O, E, E, E, E],
            Phase::Terminal(TerminalStatus::FirstWins),
        );
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_detects_double_move() {
        let state = snapshot([X, X, E, E, E, E, E, E, E], Phase::Turn(Mark::Second));
        assert_eq!(
            GameInvariants::check_all(&state),
            Err(vec![BalancedMarksInvariant::description()])
        );
    }

    #[test]
    fn test_detects_wrong_turn() {
        let state = snapshot([X, E, E, E, E, E, E, E, E], Phase::Turn(Mark::First));
        assert_eq!(
            GameInvariants::check_all(&state),
            Err(vec![PhaseMatchesBoardInvariant::description()])
        );
    }
}
