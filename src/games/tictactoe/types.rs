//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two marks in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Mark {
    /// The mark that moves first, drawn as `X`.
    #[display("X")]
    First,
    /// The mark that moves second, drawn as `O`.
    #[display("O")]
    Second,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
        }
    }

    /// Terminal status reported when this mark completes a line.
    pub fn wins(self) -> TerminalStatus {
        match self {
            Mark::First => TerminalStatus::FirstWins,
            Mark::Second => TerminalStatus::SecondWins,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// No mark placed yet.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// Errors raised by board primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Row or column outside `0..=2`.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    AlreadyOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Returns the square at `(row, col)`.
    #[instrument(skip(self))]
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Square, BoardError> {
        let pos = Position::from_row_col(row, col)?;
        Ok(self.get(pos))
    }

    /// Places `mark` at `(row, col)` if that cell is empty.
    ///
    /// On error the board is left exactly as it was.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), BoardError> {
        let pos = Position::from_row_col(row, col)?;
        if !self.is_empty(pos) {
            return Err(BoardError::AlreadyOccupied { row, col });
        }
        self.squares[pos.to_index()] = Square::Occupied(mark);
        Ok(())
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square holds a mark.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Empty positions in ascending index order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Copy of this board with `mark` written at `pos`, occupied or not.
    pub(crate) fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(mark);
        Self { squares }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Outcome classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalStatus {
    /// Play continues.
    InProgress,
    /// `X` completed a line.
    FirstWins,
    /// `O` completed a line.
    SecondWins,
    /// Full board with no completed line.
    Draw,
}

impl TerminalStatus {
    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            TerminalStatus::FirstWins => Some(Mark::First),
            TerminalStatus::SecondWins => Some(Mark::Second),
            TerminalStatus::InProgress | TerminalStatus::Draw => None,
        }
    }

    /// Returns true once play has ended.
    pub fn is_terminal(self) -> bool {
        self != TerminalStatus::InProgress
    }
}

/// Who controls the second mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    #[strum(to_string = "Two-player")]
    TwoPlayer,
    /// A human plays `X` against the heuristic agent playing `O`.
    #[strum(to_string = "Single-player")]
    SinglePlayer,
}

impl GameMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::TwoPlayer => GameMode::SinglePlayer,
            GameMode::SinglePlayer => GameMode::TwoPlayer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_on_empty_cell() {
        let mut board = Board::new();
        board.place(1, 2, Mark::First).unwrap();
        assert_eq!(board.cell_at(1, 2), Ok(Square::Occupied(Mark::First)));
        assert_eq!(board.empty_cells().len(), 8);
    }

    #[test]
    fn test_place_rejects_occupied_repeatedly() {
        let mut board = Board::new();
        board.place(0, 0, Mark::First).unwrap();
        let before = board.clone();

        for mark in [Mark::First, Mark::Second, Mark::Second] {
            assert_eq!(
                board.place(0, 0, mark),
                Err(BoardError::AlreadyOccupied { row: 0, col: 0 })
            );
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.cell_at(3, 0),
            Err(BoardError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            board.place(0, 7, Mark::Second),
            Err(BoardError::OutOfRange { row: 0, col: 7 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::new();
        board.place(0, 0, Mark::First).unwrap();
        board.place(2, 2, Mark::Second).unwrap();
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(0, 0, Mark::First).unwrap();
        board.place(1, 1, Mark::Second).unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(GameMode::TwoPlayer.toggled(), GameMode::SinglePlayer);
        assert_eq!(GameMode::SinglePlayer.toggled(), GameMode::TwoPlayer);
        assert_eq!(GameMode::SinglePlayer.to_string(), "Single-player");
    }
}
