//! Session lifecycle commands: start, move, reset, apply settings.

use crate::config::Configuration;
use crate::error::ClientError;
use crate::gate::{DropReason, InputGate, MoveOutcome};
use crate::gateway::ServerGateway;
use crate::store::{ClientEvent, GameStateStore};
use tictactoe_board::Coordinate;
use tokio::sync::mpsc;
use tracing::{error, info, instrument, warn};

/// Static text shown when a session cannot be created.
pub const INIT_FAILED_MESSAGE: &str = "Error starting game. Please refresh the page.";

/// Drives the store and gateway in response to user commands.
///
/// Each command is a single request/response exchange; failures are logged or
/// published, never retried.
pub struct SessionController<G> {
    gateway: G,
    store: GameStateStore,
    gate: InputGate,
    events: mpsc::UnboundedSender<ClientEvent>,
}

impl<G: ServerGateway> SessionController<G> {
    /// Creates a controller and the event stream the presentation layer reads.
    #[instrument(skip(gateway))]
    pub fn new(
        gateway: G,
        config: Configuration,
    ) -> (Self, mpsc::UnboundedReceiver<ClientEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut store = GameStateStore::new(config);
        store.subscribe(tx.clone());
        let controller = Self {
            gateway,
            store,
            gate: InputGate::new(tx.clone()),
            events: tx,
        };
        (controller, rx)
    }

    /// Read access to the mirror and pending configuration.
    pub fn store(&self) -> &GameStateStore {
        &self.store
    }

    /// The gateway in use.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Creates a session with the pending configuration.
    ///
    /// On failure the static init message is published and the store keeps
    /// whatever it held before.
    #[instrument(skip(self))]
    pub async fn start_new_session(&mut self) -> Result<(), ClientError> {
        let config = *self.store.configuration();
        match self.gateway.create_session(&config).await {
            Ok(session) => {
                info!(session_id = %session.id(), "Session started");
                self.store.replace(session);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to start session");
                self.publish(ClientEvent::InitFailed(INIT_FAILED_MESSAGE.to_string()));
                Err(e)
            }
        }
    }

    /// Requests a move at `(row, col)`; see [`InputGate::request_move`].
    #[instrument(skip(self))]
    pub async fn request_move(&mut self, row: u8, col: u8) -> MoveOutcome {
        match Coordinate::new(row, col) {
            Ok(coord) => self.gate.request_move(&self.gateway, &mut self.store, coord).await,
            Err(_) => MoveOutcome::Dropped(DropReason::OffBoard),
        }
    }

    /// Clears the board of the current session, or starts one if none exists.
    ///
    /// A failed reset is logged and leaves the mirror as it was.
    #[instrument(skip(self))]
    pub async fn reset(&mut self) -> Result<(), ClientError> {
        self.publish(ClientEvent::AnnouncementCleared);

        let current = match self.store.read() {
            Ok(session) => session.clone(),
            Err(_) => return self.start_new_session().await,
        };

        match self.gateway.reset_session(current.id()).await {
            Ok((id, state)) => {
                info!(session_id = %id, "Session reset");
                self.store.replace(current.with_state(id, state));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Reset failed");
                Err(e)
            }
        }
    }

    /// Stores `config` as pending without touching the current session.
    pub fn set_configuration(&mut self, config: Configuration) {
        self.store.set_configuration(config);
    }

    /// Stores `config` and starts a session with it.
    #[instrument(skip(self))]
    pub async fn apply_settings(&mut self, config: Configuration) -> Result<(), ClientError> {
        self.store.set_configuration(config);
        self.start_new_session().await
    }

    fn publish(&self, event: ClientEvent) {
        // A closed receiver only means nothing is drawing.
        let _ = self.events.send(event);
    }
}
