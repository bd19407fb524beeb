//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::{Board, Mark, Position, Square, rules};

use super::app::App;

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Rect the board occupies inside a frame of size `area`.
pub fn board_area(area: Rect) -> Rect {
    center_rect(split(area)[1], BOARD_WIDTH, BOARD_HEIGHT)
}

/// Cell under a terminal coordinate, if any. Separators map to `None`.
pub fn cell_at(board: Rect, column: u16, row: u16) -> Option<Position> {
    let col = axis_index(board.x, column, CELL_WIDTH)?;
    let row = axis_index(board.y, row, CELL_HEIGHT)?;
    Position::from_row_col(row, col).ok()
}

fn axis_index(origin: u16, at: u16, cell: u16) -> Option<usize> {
    let offset = at.checked_sub(origin)?;
    let stride = cell + 1;
    if offset % stride == cell {
        return None;
    }
    let index = usize::from(offset / stride);
    (index < 3).then_some(index)
}

fn cell_rect(board: Rect, pos: Position) -> Rect {
    let x = board.x + pos.col() as u16 * (CELL_WIDTH + 1);
    let y = board.y + pos.row() as u16 * (CELL_HEIGHT + 1);
    Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(board)
}

fn split(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Mode and help
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Status
        ])
        .split(area)
}

/// Draws one frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = split(frame.area());
    let game = app.game();

    let header = Paragraph::new(vec![
        Line::styled(
            format!("Mode: {}", game.mode()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Press M to toggle mode | R to reset | Q to quit",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    draw_board(frame, board_area(frame.area()), app);

    let status_style = if app.outcome_flash() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(game.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn draw_board(frame: &mut Frame, board_rect: Rect, app: &App) {
    let board = app.game().board();
    let line = rules::winning_line(board).map(|(_, line)| line);

    let grid = Style::default().fg(Color::DarkGray);
    for i in 1..3u16 {
        let x = board_rect.x + i * (CELL_WIDTH + 1) - 1;
        let y = board_rect.y + i * (CELL_HEIGHT + 1) - 1;
        let vertical = Rect::new(x, board_rect.y, 1, BOARD_HEIGHT).intersection(board_rect);
        let horizontal = Rect::new(board_rect.x, y, BOARD_WIDTH, 1).intersection(board_rect);
        let bar: Vec<Line> = (0..vertical.height).map(|_| Line::raw("│")).collect();
        frame.render_widget(Paragraph::new(bar).style(grid), vertical);
        frame.render_widget(
            Paragraph::new("─".repeat(usize::from(horizontal.width))).style(grid),
            horizontal,
        );
    }

    for pos in Position::ALL {
        let in_line = line.is_some_and(|l| l.contains(&pos));
        draw_cell(frame, cell_rect(board_rect, pos), board, pos, app, in_line);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    pos: Position,
    app: &App,
    in_line: bool,
) {
    let (symbol, mut style) = match board.get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::First) => (
            Mark::First.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::Second) => (
            Mark::Second.to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
    };

    if in_line {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if app.flashing(pos) {
        style = style.bg(Color::DarkGray);
    } else if pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically center the symbol in the cell.
    let text = vec![Line::raw(""), Line::raw(symbol)];
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Rect {
        Rect::new(10, 5, BOARD_WIDTH, BOARD_HEIGHT)
    }

    #[test]
    fn test_cell_at_corners() {
        assert_eq!(cell_at(board(), 10, 5), Some(Position::TopLeft));
        assert_eq!(
            cell_at(board(), 10 + BOARD_WIDTH - 1, 5 + BOARD_HEIGHT - 1),
            Some(Position::BottomRight)
        );
        assert_eq!(
            cell_at(board(), 10 + CELL_WIDTH + 1, 5 + CELL_HEIGHT + 1),
            Some(Position::Center)
        );
    }

    #[test]
    fn test_cell_at_outside_and_separators() {
        assert_eq!(cell_at(board(), 9, 5), None);
        assert_eq!(cell_at(board(), 10 + BOARD_WIDTH, 5), None);
        assert_eq!(cell_at(board(), 10 + CELL_WIDTH, 5), None);
        assert_eq!(cell_at(board(), 10, 5 + CELL_HEIGHT), None);
    }

    #[test]
    fn test_cell_rect_round_trips() {
        for pos in Position::ALL {
            let rect = cell_rect(board(), pos);
            assert_eq!(cell_at(board(), rect.x, rect.y), Some(pos));
        }
    }

    #[test]
    fn test_board_area_fits_frame() {
        let area = board_area(Rect::new(0, 0, 80, 24));
        assert_eq!((area.width, area.height), (BOARD_WIDTH, BOARD_HEIGHT));
    }
}
