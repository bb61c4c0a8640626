//! Game configuration and client settings.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_board::Marker;
use tracing::{debug, info, instrument};

/// AI strength requested from the server.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Random moves.
    Easy,
    /// Mostly optimal moves.
    #[default]
    Medium,
    /// Optimal moves.
    Hard,
}

impl Difficulty {
    /// Steps easy → medium → hard → easy.
    #[instrument]
    pub fn cycle(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}

/// Opponent settings sent when a session is created.
///
/// Changing these never touches a running session; they travel to the
/// server with the next "new game" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Whether the server plays one side.
    pub ai_enabled: bool,
    /// Marker the AI plays.
    pub ai_marker: Marker,
    /// AI strength.
    pub difficulty: Difficulty,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            ai_enabled: true,
            ai_marker: Marker::O,
            difficulty: Difficulty::Medium,
        }
    }
}

impl Configuration {
    /// Returns a copy with the AI switched on or off.
    #[instrument]
    pub fn toggle_ai(self) -> Self {
        Self {
            ai_enabled: !self.ai_enabled,
            ..self
        }
    }

    /// Returns a copy with the AI playing the other marker.
    #[instrument]
    pub fn switch_side(self) -> Self {
        Self {
            ai_marker: self.ai_marker.opponent(),
            ..self
        }
    }

    /// Returns a copy with the next difficulty.
    #[instrument]
    pub fn cycle_difficulty(self) -> Self {
        Self {
            difficulty: self.difficulty.cycle(),
            ..self
        }
    }

    /// One-line summary for display.
    pub fn summary(&self) -> String {
        if self.ai_enabled {
            format!("AI plays {} ({})", self.ai_marker, self.difficulty)
        } else {
            "Two players, no AI".to_string()
        }
    }
}

fn default_server_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_client.log")
}

/// Settings loaded from the TOML config file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Base URL of the game server (without the `/api` suffix).
    #[serde(default = "default_server_url")]
    server_url: String,

    /// File receiving log output while the terminal UI runs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Initial opponent settings.
    #[serde(default)]
    game: Configuration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            log_file: default_log_file(),
            game: Configuration::default(),
        }
    }
}

impl ClientSettings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(server_url = %settings.server_url, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, otherwise uses defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the server URL.
    pub fn with_server_url(self, server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..self
        }
    }

    /// Overrides the log file.
    pub fn with_log_file(self, log_file: impl Into<PathBuf>) -> Self {
        Self {
            log_file: log_file.into(),
            ..self
        }
    }

    /// Overrides the initial opponent settings.
    pub fn with_game(self, game: Configuration) -> Self {
        Self { game, ..self }
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
