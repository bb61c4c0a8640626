//! Command-line interface for tictactoe_client.

use crate::config::{ClientSettings, Configuration, Difficulty};
use clap::Parser;
use std::path::PathBuf;
use tictactoe_board::Marker;

/// Tic-tac-toe terminal client for a remote game server
#[derive(Parser, Debug)]
#[command(name = "tictactoe_client")]
#[command(about = "Play tic-tac-toe against a remote game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (optional)
    #[arg(short, long, default_value = "tictactoe_client.toml")]
    pub config: PathBuf,

    /// Game server URL, overriding the settings file
    #[arg(long)]
    pub server_url: Option<String>,

    /// Log file, overriding the settings file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Play without the server's AI
    #[arg(long)]
    pub no_ai: bool,

    /// Marker the AI plays (X or O)
    #[arg(long)]
    pub ai_marker: Option<Marker>,

    /// AI difficulty (easy, medium, hard)
    #[arg(long)]
    pub difficulty: Option<Difficulty>,
}

impl Cli {
    /// Layers command-line overrides on top of file settings.
    pub fn apply(&self, settings: ClientSettings) -> ClientSettings {
        let mut settings = settings;
        if let Some(url) = &self.server_url {
            settings = settings.with_server_url(url.clone());
        }
        if let Some(path) = &self.log_file {
            settings = settings.with_log_file(path.clone());
        }

        let mut game: Configuration = *settings.game();
        if self.no_ai {
            game.ai_enabled = false;
        }
        if let Some(marker) = self.ai_marker {
            game.ai_marker = marker;
        }
        if let Some(difficulty) = self.difficulty {
            game.difficulty = difficulty;
        }
        settings.with_game(game)
    }
}
