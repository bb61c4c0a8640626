//! Local pre-check and dispatch of move requests.

use crate::error::ClientError;
use crate::gateway::ServerGateway;
use crate::store::{ClientEvent, GameStateStore};
use tictactoe_board::Coordinate;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Why a move request never left the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DropReason {
    /// Coordinates outside the board.
    #[display("off board")]
    OffBoard,
    /// No session has been created yet.
    #[display("no session")]
    NoSession,
    /// The session already ended.
    #[display("game over")]
    GameOver,
    /// The target cell already holds a marker.
    #[display("cell occupied")]
    Occupied,
}

/// Result of a move request.
#[derive(Debug, Clone)]
pub enum MoveOutcome {
    /// Failed a local check; nothing was sent.
    Dropped(DropReason),
    /// Sent, and the server said no. The mirror is untouched.
    Rejected,
    /// Accepted and the mirror was replaced.
    Applied {
        /// Cell the AI answered at, if it did.
        ai_reply: Option<Coordinate>,
    },
    /// The request failed in transit. The mirror is untouched.
    Failed(ClientError),
}

impl MoveOutcome {
    /// True if a request reached the gateway.
    pub fn was_sent(&self) -> bool {
        !matches!(self, MoveOutcome::Dropped(_))
    }
}

/// Filters out move requests that cannot succeed before they cost a round-trip.
///
/// This is a convenience guard, not a rules check: the server still decides.
#[derive(Debug, Clone)]
pub struct InputGate {
    events: mpsc::UnboundedSender<ClientEvent>,
}

impl InputGate {
    /// Creates a gate that reports AI replies on `events`.
    #[instrument(skip_all)]
    pub fn new(events: mpsc::UnboundedSender<ClientEvent>) -> Self {
        Self { events }
    }

    /// Checks the mirror and, if the move looks playable, submits it.
    #[instrument(skip(self, gateway, store))]
    pub async fn request_move<G: ServerGateway + ?Sized>(
        &self,
        gateway: &G,
        store: &mut GameStateStore,
        coord: Coordinate,
    ) -> MoveOutcome {
        let session = match store.read() {
            Ok(session) => session,
            Err(_) => return Self::drop_request(DropReason::NoSession),
        };
        if session.is_terminal() {
            return Self::drop_request(DropReason::GameOver);
        }
        if !session.state().is_open(coord) {
            return Self::drop_request(DropReason::Occupied);
        }

        let reply = match gateway.submit_move(session.id(), coord).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "Move request failed");
                return MoveOutcome::Failed(e);
            }
        };

        if !reply.success {
            info!("Move rejected by server");
            return MoveOutcome::Rejected;
        }

        let next = session.with_state(reply.session_id, reply.state);
        store.replace(next);

        if let Some(ai) = reply.ai_move {
            debug!(ai = %ai, "Forwarding AI reply highlight");
            // A closed receiver only means nothing is drawing.
            let _ = self.events.send(ClientEvent::AiMoved(ai));
        }
        MoveOutcome::Applied {
            ai_reply: reply.ai_move,
        }
    }

    fn drop_request(reason: DropReason) -> MoveOutcome {
        debug!(reason = %reason, "Move dropped locally");
        MoveOutcome::Dropped(reason)
    }
}
