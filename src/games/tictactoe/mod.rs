//! Tic-tac-toe engine: board, rules, heuristic agent and turn controller.

mod action;
mod agent;
mod controller;
mod events;
mod invariants;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use agent::{AgentError, HeuristicAgent, choose_move};
pub use controller::{AGENT_MARK, GameController, Snapshot};
pub use events::{Effect, InputEvent};
pub use phases::Phase;
pub use position::Position;
pub use rules::evaluate;
pub use types::{Board, BoardError, GameMode, Mark, Square, TerminalStatus};
