//! Strictly Tic-Tac-Toe - game engine for a 3x3 board
//!
//! The engine owns the board, decides when play has ended, and drives turns
//! for two humans or a human against a heuristic agent. Presentation layers
//! feed it [`InputEvent`]s, call [`GameController::tick`] once per frame, and
//! read back a [`Snapshot`] and [`Effect`]s.
//!
//! # Architecture
//!
//! - **Board**: the nine cells and placement primitives
//! - **Rules**: win and draw detection ([`evaluate`])
//! - **Agent**: win, block, center, corner, any ([`choose_move`])
//! - **Controller**: the turn state machine with a debounced agent
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameConfig, GameController, InputEvent, Mark, Phase};
//!
//! let mut game = GameController::new(&GameConfig::default());
//! game.handle(InputEvent::CellClicked { row: 1, col: 1 });
//! assert_eq!(game.phase(), Phase::Turn(Mark::Second));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AGENT_MARK, AgentError, Board, BoardError, Effect, GameController, GameMode, HeuristicAgent,
    InputEvent, Mark, Move, MoveError, Phase, Position, Snapshot, Square, TerminalStatus,
    choose_move, evaluate, rules,
};
