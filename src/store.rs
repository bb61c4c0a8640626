//! Holder of the session mirror and the pending configuration.

use crate::config::Configuration;
use crate::error::{ClientError, ClientErrorKind};
use crate::session::GameSession;
use tictactoe_board::{Coordinate, Marker};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Notifications consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// The mirror was swapped for a new server snapshot.
    SessionReplaced(GameSession),
    /// The server's AI answered at this cell (already on the board).
    AiMoved(Coordinate),
    /// Any terminal announcement should be taken down.
    AnnouncementCleared,
    /// Starting a session failed; the message is shown as-is.
    InitFailed(String),
}

/// Owns the single [`GameSession`] mirror.
///
/// The mirror is only ever swapped whole through [`GameStateStore::replace`];
/// every swap is broadcast to subscribers.
#[derive(Debug)]
pub struct GameStateStore {
    session: Option<GameSession>,
    pending: Configuration,
    subscribers: Vec<mpsc::UnboundedSender<ClientEvent>>,
}

impl GameStateStore {
    /// Creates an empty store with the given pending configuration.
    #[instrument]
    pub fn new(pending: Configuration) -> Self {
        Self {
            session: None,
            pending,
            subscribers: Vec::new(),
        }
    }

    /// Registers a channel to receive a [`ClientEvent::SessionReplaced`] per swap.
    #[instrument(skip_all)]
    pub fn subscribe(&mut self, sender: mpsc::UnboundedSender<ClientEvent>) {
        self.subscribers.push(sender);
        debug!(subscribers = self.subscribers.len(), "Subscriber added");
    }

    /// Swaps in a new mirror. No validation: the server is the authority.
    #[instrument(skip_all, fields(session_id = %session.id(), board = %session.board()))]
    pub fn replace(&mut self, session: GameSession) {
        let x = session.board().count(Marker::X);
        let o = session.board().count(Marker::O);
        debug!(terminal = session.is_terminal(), x, o, "Replacing session mirror");
        if x.abs_diff(o) > 1 {
            warn!(x, o, "Server board has unbalanced marker counts");
        }
        self.session = Some(session.clone());
        self.subscribers
            .retain(|tx| tx.send(ClientEvent::SessionReplaced(session.clone())).is_ok());
    }

    /// Current mirror.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn read(&self) -> Result<&GameSession, ClientError> {
        self.session
            .as_ref()
            .ok_or_else(|| ClientError::new(ClientErrorKind::NoActiveSession))
    }

    /// True once any session has been stored.
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Stores a configuration for the next session; the current one is untouched.
    #[instrument(skip(self))]
    pub fn set_configuration(&mut self, config: Configuration) {
        info!("Pending configuration updated");
        self.pending = config;
    }

    /// Configuration the next session will be created with.
    pub fn configuration(&self) -> &Configuration {
        &self.pending
    }
}
