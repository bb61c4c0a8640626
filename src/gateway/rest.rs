//! HTTP/JSON implementation of [`ServerGateway`].

use super::wire::{MoveRequest, MoveResponse, NewGameRequest, NewGameResponse, ResetResponse};
use super::{MoveReply, ServerGateway};
use crate::config::Configuration;
use crate::error::{ClientError, ClientErrorKind};
use crate::session::{GameSession, SessionId, SessionState};
use async_trait::async_trait;
use reqwest::StatusCode;
use tictactoe_board::Coordinate;
use tracing::{debug, info, instrument, warn};

/// Talks to the game service under `{base_url}/api`.
#[derive(Debug, Clone)]
pub struct RestGateway {
    base_url: String,
    client: reqwest::Client,
}

impl RestGateway {
    /// Creates a gateway for the server at `base_url`.
    #[instrument(skip_all, fields(base_url = %base_url.as_ref()))]
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        info!("Creating REST gateway");
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Base URL without the API prefix.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Sends a POST and returns status plus body text.
    async fn post<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<(StatusCode, String), ClientError> {
        let mut request = self
            .client
            .post(self.endpoint(path))
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = %status, body = %text, "Got response");
        Ok((status, text))
    }
}

#[track_caller]
fn status_error(status: StatusCode, body: String) -> ClientError {
    ClientError::new(ClientErrorKind::HttpStatus {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl ServerGateway for RestGateway {
    #[instrument(skip(self))]
    async fn create_session(&self, config: &Configuration) -> Result<GameSession, ClientError> {
        info!("Requesting new game");
        let (status, body) = self
            .post("/new_game", Some(&NewGameRequest::from(config)))
            .await?;
        if !status.is_success() {
            return Err(status_error(status, body));
        }

        let reply: NewGameResponse = serde_json::from_str(&body)?;
        info!(game_id = %reply.game_id, "Game created");
        Ok(reply.into())
    }

    #[instrument(skip_all, fields(session_id = %id, coord = %coord))]
    async fn submit_move(
        &self,
        id: &SessionId,
        coord: Coordinate,
    ) -> Result<MoveReply, ClientError> {
        info!("Submitting move");
        let path = format!("/game/{}/move", id.as_str());
        let (status, body) = self.post(&path, Some(&MoveRequest::from(coord))).await?;

        // The service reports an illegal move as 400 with a regular move body.
        let reply: MoveResponse = match serde_json::from_str(&body) {
            Ok(reply) if status.is_success() => reply,
            Ok(reply) if status == StatusCode::BAD_REQUEST && !reply.success => reply,
            Ok(_) => return Err(status_error(status, body)),
            Err(_) if !status.is_success() => return Err(status_error(status, body)),
            Err(e) => return Err(e.into()),
        };

        if let Some(reason) = &reply.error {
            warn!(reason = %reason, "Server rejected move");
        }
        Ok(MoveReply {
            success: reply.success,
            session_id: reply.game_id,
            state: reply.state.into(),
            ai_move: reply.ai_move,
        })
    }

    #[instrument(skip_all, fields(session_id = %id))]
    async fn reset_session(
        &self,
        id: &SessionId,
    ) -> Result<(SessionId, SessionState), ClientError> {
        info!("Resetting game");
        let path = format!("/game/{}/reset", id.as_str());
        let (status, body) = self.post::<()>(&path, None).await?;
        if !status.is_success() {
            return Err(status_error(status, body));
        }

        let reply: ResetResponse = serde_json::from_str(&body)?;
        if let Some(message) = &reply.message {
            debug!(message = %message, "Reset acknowledged");
        }
        Ok((reply.game_id, reply.state.into()))
    }
}
