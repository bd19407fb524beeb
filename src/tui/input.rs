//! Key bindings and cursor movement.

use crossterm::event::KeyCode;
use strictly_tictactoe::{InputEvent, Position};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the game.
    Quit,
    /// Forward an event to the controller.
    Input(InputEvent),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Move the cursor.
    MoveCursor(KeyCode),
    /// Unbound key.
    Ignore,
}

/// Maps a key to its command.
pub fn command_for(code: KeyCode) -> Command {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Input(InputEvent::ResetRequested),
        KeyCode::Char('m') | KeyCode::Char('M') => Command::Input(InputEvent::ModeToggleRequested),
        KeyCode::Enter | KeyCode::Char(' ') => Command::PlaceAtCursor,
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Command::MoveCursor(code),
        KeyCode::Char(c) => match Position::from_digit(c) {
            Some(pos) => Command::Input(InputEvent::CellClicked {
                row: pos.row(),
                col: pos.col(),
            }),
            None => Command::Ignore,
        },
        _ => Command::Ignore,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Down),
            Position::BottomRight
        );
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
    }

    #[test]
    fn test_digits_click_cells() {
        assert_eq!(
            command_for(KeyCode::Char('3')),
            Command::Input(InputEvent::CellClicked { row: 0, col: 2 })
        );
        assert_eq!(command_for(KeyCode::Char('0')), Command::Ignore);
        assert_eq!(
            command_for(KeyCode::Char('m')),
            Command::Input(InputEvent::ModeToggleRequested)
        );
    }
}
