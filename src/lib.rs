//! Tic-tac-toe client for a server-authoritative game service.
//!
//! The server owns the game and its AI. This crate keeps a local mirror of
//! the server's state, screens out move requests that obviously cannot
//! succeed, and turns each new mirror into something to draw.
//!
//! # Architecture
//!
//! - **Store**: [`GameStateStore`] holds the single [`GameSession`] mirror
//! - **Gateway**: [`ServerGateway`] with the HTTP implementation [`RestGateway`]
//! - **Gate**: [`InputGate`] checks moves locally before sending them
//! - **Controller**: [`SessionController`] runs new game / move / reset
//! - **Presentation**: [`PresentationDriver`] builds a [`Scene`] from store events
//! - **TUI**: ratatui front end drawing the scene
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_client::{Configuration, RestGateway, SessionController};
//!
//! # async fn example() -> Result<(), tictactoe_client::ClientError> {
//! let gateway = RestGateway::new("http://127.0.0.1:8080");
//! let (mut controller, _events) = SessionController::new(gateway, Configuration::default());
//! controller.start_new_session().await?;
//! controller.request_move(1, 1).await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod controller;
mod error;
mod gate;
mod gateway;
mod presentation;
mod session;
mod store;
pub mod tui;

pub use config::{ClientSettings, ConfigError, Configuration, Difficulty};
pub use controller::{INIT_FAILED_MESSAGE, SessionController};
pub use error::{ClientError, ClientErrorKind};
pub use gate::{DropReason, InputGate, MoveOutcome};
pub use gateway::{
    MoveReply, MoveRequest, MoveResponse, NewGameRequest, NewGameResponse, ResetResponse,
    RestGateway, ServerGateway, WireState,
};
pub use presentation::{
    AI_HIGHLIGHT, Announcement, CellView, Celebration, FallingParticle, Particle,
    PresentationDriver, Rgb, Scene, palette,
};
pub use session::{GameSession, SessionId, SessionState};
pub use store::{ClientEvent, GameStateStore};

pub use tictactoe_board::{
    Board, Cell, Coordinate, Lane, Marker, WIN_PATTERNS, WinPattern, find_winning_line,
};
