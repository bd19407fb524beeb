//! Strictly Tic-Tac-Toe - terminal front end.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_tictactoe::{GameConfig, GameMode};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            single_player,
            agent_delay,
            fps,
            seed,
            log_file,
        } => {
            init_logging(&log_file)?;

            let mut config = match config {
                Some(path) => GameConfig::from_file(&path)
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                None => GameConfig::default(),
            };
            if single_player {
                config = config.with_mode(GameMode::SinglePlayer);
            }
            if let Some(ticks) = agent_delay {
                config = config.with_agent_delay_ticks(ticks);
            }
            if let Some(fps) = fps {
                config = config.with_fps(fps);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            config.validate()?;

            info!(?config, "Configuration resolved");
            tui::run(&config)
        }
    }
}

/// Sends logs to a file so they do not interfere with the TUI.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
