//! Game configuration.

use crate::games::tictactoe::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Two-player or single-player against the agent.
    #[serde(default)]
    mode: GameMode,

    /// Frames the agent waits before replying.
    #[serde(default = "default_agent_delay_ticks")]
    agent_delay_ticks: u32,

    /// Frames per second of the front end loop.
    #[serde(default = "default_fps")]
    fps: u32,

    /// Seed for the agent's tie-breaks. Random when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_agent_delay_ticks() -> u32 {
    16
}

fn default_fps() -> u32 {
    60
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            agent_delay_ticks: default_agent_delay_ticks(),
            fps: default_fps(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(mode = %config.mode, agent_delay_ticks = config.agent_delay_ticks, "Config loaded");
        Ok(config)
    }

    /// Rejects values the frame loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.agent_delay_ticks == 0 {
            return Err(ConfigError::new(
                "agent_delay_ticks must be at least 1".to_string(),
            ));
        }
        if self.fps == 0 {
            return Err(ConfigError::new("fps must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Sets the game mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the agent delay in frames.
    pub fn with_agent_delay_ticks(mut self, ticks: u32) -> Self {
        self.agent_delay_ticks = ticks;
        self
    }

    /// Sets the frame rate.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Fixes the agent's random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
