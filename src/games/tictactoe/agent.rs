//! Heuristic opponent for tic-tac-toe.
//!
//! No search: one ply of lookahead for an immediate win or an immediate
//! block, then a fixed positional preference. It plays sensibly but loses to
//! forks.

use super::rules::check_winner;
use super::{Board, Mark, Position};
use derive_more::{Display, Error};
use rand::Rng;
use tracing::{debug, instrument};

/// Errors raised when asking the agent for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum AgentError {
    /// The board has no empty cell.
    #[display("No move available on a full board")]
    NoMoveAvailable,
}

/// Picks a move for `mark`.
///
/// Priority, first match wins:
/// 1. a cell that completes a line for `mark`,
/// 2. a cell that would complete a line for the opponent,
/// 3. the center,
/// 4. a random empty corner,
/// 5. a random empty cell.
///
/// Steps 1 and 2 scan empty cells in ascending index order and stop at the
/// first hit, so only one opponent threat is ever blocked.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn choose_move<R: Rng>(
    board: &Board,
    mark: Mark,
    rng: &mut R,
) -> Result<Position, AgentError> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return Err(AgentError::NoMoveAvailable);
    }

    if let Some(pos) = completing_cell(board, &empty, mark) {
        debug!(position = %pos, "Taking winning cell");
        return Ok(pos);
    }

    if let Some(pos) = completing_cell(board, &empty, mark.opponent()) {
        debug!(position = %pos, "Blocking opponent");
        return Ok(pos);
    }

    if board.is_empty(Position::Center) {
        debug!("Taking center");
        return Ok(Position::Center);
    }

    let corners: Vec<Position> = Position::CORNERS
        .into_iter()
        .filter(|pos| board.is_empty(*pos))
        .collect();
    let pool = if corners.is_empty() { &empty } else { &corners };
    let pos = pool[rng.random_range(0..pool.len())];
    debug!(position = %pos, from_corners = !corners.is_empty(), "Random pick");
    Ok(pos)
}

/// First empty cell where `mark` would complete a line.
fn completing_cell(board: &Board, empty: &[Position], mark: Mark) -> Option<Position> {
    empty
        .iter()
        .copied()
        .find(|pos| check_winner(&board.with_mark(*pos, mark)) == Some(mark))
}

/// Heuristic agent bundling [`choose_move`] with its own random source.
#[derive(Debug, Clone)]
pub struct HeuristicAgent<R> {
    rng: R,
}

impl<R: Rng> HeuristicAgent<R> {
    /// Creates an agent drawing tie-breaks from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks a move for `mark` on `board`.
    pub fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<Position, AgentError> {
        choose_move(board, mark, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const X: Square = Square::Occupied(Mark::First);
    const O: Square = Square::Occupied(Mark::Second);
    const E: Square = Square::Empty;

    #[test]
    fn test_completing_cell_scans_in_index_order() {
        // X threatens both 2 (row 0) and 6 (column 0).
        let board = Board::from_squares([X, X, E, X, O, O, E, O, E]);
        let empty = board.empty_cells();
        assert_eq!(
            completing_cell(&board, &empty, Mark::First),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_squares([X, O, X, X, O, O, O, X, X]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            choose_move(&board, Mark::Second, &mut rng),
            Err(AgentError::NoMoveAvailable)
        );
    }

    #[test]
    fn test_last_cell_is_taken() {
        // Only cell 8 is open and nothing is at stake there.
        let board = Board::from_squares([X, O, X, X, O, O, O, X, E]);
        let mut agent = HeuristicAgent::new(StdRng::seed_from_u64(1));
        assert_eq!(
            agent.choose_move(&board, Mark::Second),
            Ok(Position::BottomRight)
        );
    }
}
