//! Shared test helpers: a scripted in-memory gateway and board builders.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tictactoe_client::{
    Board, ClientError, ClientErrorKind, Configuration, Coordinate, GameSession, Marker,
    MoveReply, ServerGateway, SessionId, SessionState,
};

/// Marker shorthands for board literals.
pub const X: Option<Marker> = Some(Marker::X);
pub const O: Option<Marker> = Some(Marker::O);
pub const E: Option<Marker> = None;

/// Builds a coordinate known to be on the board.
pub fn at(row: u8, col: u8) -> Coordinate {
    Coordinate::new(row, col).expect("on board")
}

/// Builds a server state.
pub fn state(
    rows: [[Option<Marker>; 3]; 3],
    active: Marker,
    winner: Option<Marker>,
    terminal: bool,
) -> SessionState {
    SessionState::new(Board::from_rows(rows), active, winner, terminal)
}

/// Server state of a game still in progress with X to move.
pub fn running(rows: [[Option<Marker>; 3]; 3]) -> SessionState {
    state(rows, Marker::X, None, false)
}

/// A recorded gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create(Configuration),
    Move(SessionId, Coordinate),
    Reset(SessionId),
}

/// Gateway answering from queued replies and recording every call.
#[derive(Default)]
pub struct ScriptedGateway {
    creates: Mutex<VecDeque<Result<GameSession, ClientError>>>,
    moves: Mutex<VecDeque<Result<MoveReply, ClientError>>>,
    resets: Mutex<VecDeque<Result<(SessionId, SessionState), ClientError>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_create(self, reply: Result<GameSession, ClientError>) -> Self {
        self.creates.lock().expect("lock").push_back(reply);
        self
    }

    pub fn on_move(self, reply: Result<MoveReply, ClientError>) -> Self {
        self.moves.lock().expect("lock").push_back(reply);
        self
    }

    pub fn on_reset(self, reply: Result<(SessionId, SessionState), ClientError>) -> Self {
        self.resets.lock().expect("lock").push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("lock").clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("lock").push(call);
    }
}

/// Error value standing in for an unreachable server.
pub fn offline() -> ClientError {
    ClientError::new(ClientErrorKind::Network("connection refused".to_string()))
}

/// Accepted move reply.
pub fn accepted(state: SessionState, ai_move: Option<Coordinate>) -> MoveReply {
    MoveReply {
        success: true,
        session_id: SessionId::from("1"),
        state,
        ai_move,
    }
}

/// Session as the server would create it.
pub fn created(config: Configuration) -> GameSession {
    GameSession::new(SessionId::from("1"), SessionState::initial(), config)
}

#[async_trait]
impl ServerGateway for ScriptedGateway {
    async fn create_session(&self, config: &Configuration) -> Result<GameSession, ClientError> {
        self.record(Call::Create(*config));
        self.creates
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| Err(offline()))
    }

    async fn submit_move(
        &self,
        id: &SessionId,
        coord: Coordinate,
    ) -> Result<MoveReply, ClientError> {
        self.record(Call::Move(id.clone(), coord));
        self.moves
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| Err(offline()))
    }

    async fn reset_session(
        &self,
        id: &SessionId,
    ) -> Result<(SessionId, SessionState), ClientError> {
        self.record(Call::Reset(id.clone()));
        self.resets
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| Err(offline()))
    }
}
