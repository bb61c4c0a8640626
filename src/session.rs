//! The client's copy of a server-owned game session.

use crate::config::Configuration;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tictactoe_board::{Board, Coordinate, Marker};

/// Opaque session token issued by the server.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Token as sent in request paths.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Board and turn data as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, new)]
pub struct SessionState {
    /// Current board.
    board: Board,
    /// Marker to move next.
    active: Marker,
    /// Winning marker, if any.
    winner: Option<Marker>,
    /// No further moves are possible.
    terminal: bool,
}

impl SessionState {
    /// Fresh board with X to move.
    pub fn initial() -> Self {
        Self::new(Board::new(), Marker::X, None, false)
    }

    /// True if `coord` is empty on the mirrored board.
    pub fn is_open(&self, coord: Coordinate) -> bool {
        self.board.is_empty(coord)
    }
}

/// One game in progress, as last reported by the server.
///
/// Instances are only ever replaced whole; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, new)]
pub struct GameSession {
    /// Server-issued identifier.
    id: SessionId,
    /// Board and turn data.
    state: SessionState,
    /// Opponent settings the server applied when the session was created.
    config: Configuration,
}

impl GameSession {
    /// Same session identity and settings, new board state.
    pub fn with_state(&self, id: SessionId, state: SessionState) -> Self {
        Self::new(id, state, self.config)
    }

    /// Shortcut for `state().board()`.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Shortcut for `state().terminal()`.
    pub fn is_terminal(&self) -> bool {
        *self.state.terminal()
    }
}
