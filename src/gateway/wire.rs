//! JSON bodies exchanged with the game service.

use crate::config::{Configuration, Difficulty};
use crate::session::{GameSession, SessionId, SessionState};
use serde::{Deserialize, Serialize};
use tictactoe_board::{Board, Coordinate, Marker};

/// The `state` object present in every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireState {
    /// Rows of `"X" | "O" | null`.
    pub board: Board,
    /// Marker to move next.
    pub current_player: Marker,
    /// Winner, once there is one.
    pub winner: Option<Marker>,
    /// No further moves possible.
    pub game_over: bool,
}

impl From<WireState> for SessionState {
    fn from(state: WireState) -> Self {
        SessionState::new(state.board, state.current_player, state.winner, state.game_over)
    }
}

impl From<&SessionState> for WireState {
    fn from(state: &SessionState) -> Self {
        Self {
            board: state.board().clone(),
            current_player: *state.active(),
            winner: *state.winner(),
            game_over: *state.terminal(),
        }
    }
}

/// `POST /api/new_game` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameRequest {
    /// Whether the server plays one side.
    pub ai_enabled: bool,
    /// Marker for the AI.
    pub ai_player: Marker,
    /// AI strength.
    pub difficulty: Difficulty,
}

impl From<&Configuration> for NewGameRequest {
    fn from(config: &Configuration) -> Self {
        Self {
            ai_enabled: config.ai_enabled,
            ai_player: config.ai_marker,
            difficulty: config.difficulty,
        }
    }
}

/// `POST /api/new_game` reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameResponse {
    /// Issued session token.
    pub game_id: SessionId,
    /// Initial state, already including the AI's opening move if it plays X.
    pub state: WireState,
    /// AI flag as applied by the server.
    pub ai_enabled: bool,
    /// AI marker as applied by the server.
    pub ai_player: Marker,
    /// Difficulty as applied by the server.
    pub difficulty: Difficulty,
}

impl From<NewGameResponse> for GameSession {
    fn from(reply: NewGameResponse) -> Self {
        let applied = Configuration {
            ai_enabled: reply.ai_enabled,
            ai_marker: reply.ai_player,
            difficulty: reply.difficulty,
        };
        GameSession::new(reply.game_id, reply.state.into(), applied)
    }
}

/// `POST /api/game/{id}/move` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Row, 0-2.
    pub row: u8,
    /// Column, 0-2.
    pub col: u8,
}

impl From<Coordinate> for MoveRequest {
    fn from(coord: Coordinate) -> Self {
        Self {
            row: coord.row(),
            col: coord.col(),
        }
    }
}

/// `POST /api/game/{id}/move` reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    /// Whether the move was applied.
    pub success: bool,
    /// Session token.
    pub game_id: SessionId,
    /// State after the move (unchanged on rejection).
    pub state: WireState,
    /// AI reply coordinate, if the AI moved.
    #[serde(default)]
    pub ai_move: Option<Coordinate>,
    /// Server's reason for a rejection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `POST /api/game/{id}/reset` reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetResponse {
    /// Session token.
    pub game_id: SessionId,
    /// Fresh state.
    pub state: WireState,
    /// Informational text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
