//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Tic-Tac-Toe - terminal tic-tac-toe with a heuristic opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe for two players or against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Start against the computer instead of two-player
        #[arg(short, long)]
        single_player: bool,

        /// Frames the computer waits before replying
        #[arg(long)]
        agent_delay: Option<u32>,

        /// Frame rate of the game loop
        #[arg(long)]
        fps: Option<u32>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// File receiving log output while the UI owns the terminal
        #[arg(long, default_value = "strictly_tictactoe.log")]
        log_file: PathBuf,
    },
}
