//! Application state and logic.

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use strictly_tictactoe::{Effect, GameConfig, GameController, InputEvent, Position};
use tracing::debug;

use super::input::{self, Command};
use super::ui;

/// Frames a placed mark stays highlighted.
const MOVE_FLASH_FRAMES: u32 = 8;
/// Frames the status bar flashes after a game ends.
const OUTCOME_FLASH_FRAMES: u32 = 30;

/// Main application state.
pub struct App {
    game: GameController,
    cursor: Position,
    frame_area: Rect,
    last_move: Option<(Position, u32)>,
    outcome_flash: u32,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            game: GameController::new(config),
            cursor: Position::Center,
            frame_area: Rect::default(),
            last_move: None,
            outcome_flash: 0,
            should_quit: false,
        }
    }

    /// Gets the controller.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns true while `pos` holds a freshly placed mark.
    pub fn flashing(&self, pos: Position) -> bool {
        matches!(self.last_move, Some((p, frames)) if p == pos && frames > 0)
    }

    /// Returns true while a game result is being announced.
    pub fn outcome_flash(&self) -> bool {
        self.outcome_flash > 0
    }

    /// Records the terminal size used for mouse hit-testing.
    pub fn resize(&mut self, area: Rect) {
        self.frame_area = area;
    }

    /// Handles a key press.
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match input::command_for(key.code) {
            Command::Quit => self.should_quit = true,
            Command::Input(event) => self.dispatch(event),
            Command::PlaceAtCursor => self.dispatch(InputEvent::CellClicked {
                row: self.cursor.row(),
                col: self.cursor.col(),
            }),
            Command::MoveCursor(code) => self.cursor = input::move_cursor(self.cursor, code),
            Command::Ignore => {}
        }
    }

    /// Handles a mouse event. Left clicks on a cell place a mark.
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let board = ui::board_area(self.frame_area);
        if let Some(pos) = ui::cell_at(board, mouse.column, mouse.row) {
            self.cursor = pos;
            self.dispatch(InputEvent::CellClicked {
                row: pos.row(),
                col: pos.col(),
            });
        }
    }

    /// Advances one frame and returns the effects it produced.
    pub fn on_frame(&mut self) -> Vec<Effect> {
        self.game.tick();

        if let Some((_, frames)) = self.last_move.as_mut() {
            *frames = frames.saturating_sub(1);
        }
        self.outcome_flash = self.outcome_flash.saturating_sub(1);

        let effects = self.game.take_effects();
        for effect in &effects {
            match effect {
                Effect::MovePlaced(mv) => {
                    self.last_move = Some((mv.position, MOVE_FLASH_FRAMES));
                }
                Effect::GameWon(_) | Effect::GameDrawn => {
                    self.outcome_flash = OUTCOME_FLASH_FRAMES;
                }
            }
        }
        effects
    }

    fn dispatch(&mut self, event: InputEvent) {
        debug!(?event, "Dispatching input");
        if matches!(
            event,
            InputEvent::ResetRequested | InputEvent::ModeToggleRequested
        ) {
            self.last_move = None;
            self.outcome_flash = 0;
        }
        self.game.handle(event);
    }
}
