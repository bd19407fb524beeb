//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

/// The eight winning triples, checked in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and its owner.
///
/// Alternating single-mark play can complete at most one new line per move,
/// so boards with two finished lines only arise from hand-built fixtures.
/// Those report whichever line comes first in [`LINES`].
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, [Position; 3])> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(mark) if sq == board.get(b) && sq == board.get(c) => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        let mut squares = [Square::Empty; 9];
        for (pos, mark) in marks {
            squares[pos.to_index()] = Square::Occupied(*mark);
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            for mark in [Mark::First, Mark::Second] {
                let board = board_with(&line.map(|pos| (pos, mark)));
                assert_eq!(winning_line(&board), Some((mark, line)));
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::First),
            (Position::TopCenter, Mark::Second),
            (Position::TopRight, Mark::First),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_double_win_reports_first_line() {
        // X holds row 0, O holds row 1.
        let board = board_with(&[
            (Position::MiddleLeft, Mark::Second),
            (Position::Center, Mark::Second),
            (Position::MiddleRight, Mark::Second),
            (Position::TopLeft, Mark::First),
            (Position::TopCenter, Mark::First),
            (Position::TopRight, Mark::First),
        ]);
        assert_eq!(check_winner(&board), Some(Mark::First));
    }

    #[test]
    fn test_column_checked_before_diagonal() {
        // X holds column 1 and the main diagonal.
        let board = board_with(&[
            (Position::TopLeft, Mark::First),
            (Position::TopCenter, Mark::First),
            (Position::Center, Mark::First),
            (Position::BottomCenter, Mark::First),
            (Position::BottomRight, Mark::First),
        ]);
        assert_eq!(winning_line(&board), Some((Mark::First, LINES[4])));
    }
}
