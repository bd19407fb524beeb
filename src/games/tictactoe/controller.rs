//! Frame-driven turn controller.
//!
//! Owns the board and drives it through [`Phase`]s in response to
//! [`InputEvent`]s and per-frame [`GameController::tick`] calls. The agent's
//! "thinking" delay is a tick counter, so no call ever blocks.

use super::agent::HeuristicAgent;
use super::events::{Effect, InputEvent};
use super::invariants::{GameInvariants, InvariantSet};
use super::phases::Phase;
use super::rules::evaluate;
use super::{Board, GameMode, Mark, Move, MoveError, Position, TerminalStatus};
use crate::config::GameConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, error, info, instrument};

/// The mark played by the agent in single-player mode.
pub const AGENT_MARK: Mark = Mark::Second;

/// Read-only view of the game for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Board contents.
    pub board: Board,
    /// Current phase.
    pub phase: Phase,
    /// Current mode.
    pub mode: GameMode,
    /// Human-readable status line.
    pub status: String,
}

/// Turn state machine for one board.
#[derive(Debug, Clone)]
pub struct GameController<R = StdRng> {
    board: Board,
    phase: Phase,
    mode: GameMode,
    agent: HeuristicAgent<R>,
    agent_delay: u32,
    agent_wait: u32,
    status: String,
    effects: Vec<Effect>,
}

impl GameController<StdRng> {
    /// Creates a controller from configuration.
    ///
    /// Uses the configured seed when present, otherwise OS entropy.
    #[instrument(skip(config), fields(mode = %config.mode()))]
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GameController<R> {
    /// Creates a controller whose agent draws tie-breaks from `rng`.
    pub fn with_rng(config: &GameConfig, rng: R) -> Self {
        Self {
            board: Board::new(),
            phase: Phase::START,
            mode: *config.mode(),
            agent: HeuristicAgent::new(rng),
            agent_delay: (*config.agent_delay_ticks()).max(1),
            agent_wait: 0,
            status: format!("{}'s turn. Press M for single-player mode.", Mark::First),
            effects: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the status line for display.
    pub fn status_message(&self) -> &str {
        &self.status
    }

    /// Ticks spent waiting on the agent so far.
    pub fn agent_wait(&self) -> u32 {
        self.agent_wait
    }

    /// Returns true while the agent owns the current turn.
    pub fn agent_to_move(&self) -> bool {
        self.mode == GameMode::SinglePlayer && self.phase == Phase::Turn(AGENT_MARK)
    }

    /// Captures the state a presentation layer needs for one frame.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            phase: self.phase,
            mode: self.mode,
            status: self.status.clone(),
        }
    }

    /// Removes and returns effects emitted since the last call.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Routes one input event to its transition.
    ///
    /// Cell clicks place the mark whose turn it is, except while the agent
    /// owns the turn. Rejected clicks leave the state unchanged.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::CellClicked { row, col } => {
                let Some(mark) = self.phase.to_move() else {
                    debug!("Ignoring click after game end");
                    return;
                };
                if self.agent_to_move() {
                    debug!("Ignoring click during agent turn");
                    return;
                }
                if let Err(e) = self.apply_move(row, col, mark) {
                    debug!(error = %e, "Click rejected");
                }
            }
            InputEvent::ResetRequested => self.reset(),
            InputEvent::ModeToggleRequested => self.toggle_mode(),
        }
    }

    /// Places `mark` at `(row, col)` if it is `mark`'s turn.
    ///
    /// On success the board is evaluated and the phase advances to the
    /// opponent's turn or to a terminal phase. On error nothing changes.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) -> Result<Phase, MoveError> {
        match self.phase {
            Phase::Terminal(_) => return Err(MoveError::GameOver),
            Phase::Turn(to_move) if to_move != mark => return Err(MoveError::NotYourTurn(mark)),
            Phase::Turn(_) => {}
        }

        let position = Position::from_row_col(row, col)?;
        self.board.place(row, col, mark)?;
        self.effects.push(Effect::MovePlaced(Move::new(mark, position)));

        let status = evaluate(&self.board);
        self.phase = Phase::after_move(mark, status);
        self.agent_wait = 0;
        self.status = match status {
            TerminalStatus::InProgress => format!("{}'s turn.", mark.opponent()),
            TerminalStatus::Draw => "Draw! Press R to play again.".to_string(),
            TerminalStatus::FirstWins | TerminalStatus::SecondWins => {
                format!("{} wins! Press R to play again.", mark)
            }
        };

        match status {
            TerminalStatus::InProgress => {}
            TerminalStatus::Draw => {
                info!("Game drawn");
                self.effects.push(Effect::GameDrawn);
            }
            TerminalStatus::FirstWins | TerminalStatus::SecondWins => {
                info!(winner = %mark, "Game won");
                self.effects.push(Effect::GameWon(mark));
            }
        }

        if let Err(violations) = GameInvariants::check_all(&self.snapshot()) {
            error!(?violations, "Invariant violation after move");
            if cfg!(debug_assertions) {
                panic!("invariant violation after move: {violations:?}");
            }
        }

        Ok(self.phase)
    }

    /// Advances one frame.
    ///
    /// While the agent owns the turn, each tick counts toward the delay;
    /// the tick that reaches it plays the agent's move. Any other time
    /// this is a no-op. Every successful move restarts the count.
    pub fn tick(&mut self) {
        if !self.agent_to_move() {
            return;
        }

        self.agent_wait += 1;
        if self.agent_wait < self.agent_delay {
            return;
        }

        match self.agent.choose_move(&self.board, AGENT_MARK) {
            Ok(pos) => {
                debug!(position = %pos, "Agent moving");
                if let Err(e) = self.apply_move(pos.row(), pos.col(), AGENT_MARK) {
                    error!(error = %e, "Agent produced an illegal move");
                    if cfg!(debug_assertions) {
                        panic!("agent produced an illegal move: {e}");
                    }
                }
            }
            Err(e) => {
                error!(error = %e, "Agent asked to move on a finished board");
                if cfg!(debug_assertions) {
                    panic!("agent asked to move on a finished board");
                }
            }
        }
    }

    /// Clears the board and hands the first move to `X`. Mode is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.clear();
        self.status = format!("Board reset. {}'s turn.", Mark::First);
        info!(mode = %self.mode, "Board reset");
    }

    /// Switches mode and starts a fresh game.
    #[instrument(skip(self))]
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.clear();
        self.status = match self.mode {
            GameMode::SinglePlayer => format!(
                "Single-player: You ({}) vs AI ({}).",
                AGENT_MARK.opponent(),
                AGENT_MARK
            ),
            GameMode::TwoPlayer => "Two-player mode.".to_string(),
        };
        info!(mode = %self.mode, "Mode toggled");
    }

    fn clear(&mut self) {
        self.board.reset();
        self.phase = Phase::START;
        self.agent_wait = 0;
    }
}
