//! Remote game service boundary.
//!
//! The service owns the real game state and the AI. The client performs
//! exactly three single request/response exchanges against it; there is no
//! polling and nothing is retried.

mod rest;
mod wire;

pub use rest::RestGateway;
pub use wire::{
    MoveRequest, MoveResponse, NewGameRequest, NewGameResponse, ResetResponse, WireState,
};

use crate::config::Configuration;
use crate::error::ClientError;
use crate::session::{GameSession, SessionId, SessionState};
use async_trait::async_trait;
use tictactoe_board::Coordinate;

/// Normalized reply to a move submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReply {
    /// Whether the server accepted the move.
    pub success: bool,
    /// Session the reply belongs to.
    pub session_id: SessionId,
    /// Board after the move and any AI reply.
    pub state: SessionState,
    /// Where the AI answered, if it did.
    pub ai_move: Option<Coordinate>,
}

/// The three operations the client performs against the game service.
#[async_trait]
pub trait ServerGateway: Send + Sync {
    /// Creates a session with the given opponent settings.
    async fn create_session(&self, config: &Configuration) -> Result<GameSession, ClientError>;

    /// Submits a move for the side to play.
    async fn submit_move(
        &self,
        id: &SessionId,
        coord: Coordinate,
    ) -> Result<MoveReply, ClientError>;

    /// Clears the board of an existing session.
    async fn reset_session(
        &self,
        id: &SessionId,
    ) -> Result<(SessionId, SessionState), ClientError>;
}
