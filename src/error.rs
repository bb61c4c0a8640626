//! Client error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong talking to the server or reading the mirror.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ClientErrorKind {
    /// An operation needing a session ran before one existed.
    #[display("no active session")]
    NoActiveSession,
    /// The request never got a response.
    #[display("network failure: {_0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[display("server returned HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },
    /// The response body did not match the expected shape.
    #[display("malformed server response: {_0}")]
    Decode(String),
}

/// Client error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Client error: {} at {}:{}", kind, file, line)]
pub struct ClientError {
    /// Error category.
    pub kind: ClientErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ClientError {
    /// Creates a new client error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ClientErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// True for any failure of a remote call (transport, status or body).
    pub fn is_network(&self) -> bool {
        !matches!(self.kind, ClientErrorKind::NoActiveSession)
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::new(ClientErrorKind::Decode(err.to_string()))
        } else {
            Self::new(ClientErrorKind::Network(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(ClientErrorKind::Decode(err.to_string()))
    }
}
