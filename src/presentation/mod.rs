//! Turns mirror updates into a drawable [`Scene`].
//!
//! The driver knows nothing about terminals: it keeps a scene description
//! (cells, status, announcement, confetti) that any front end can draw.

mod celebration;

pub use celebration::{Celebration, FallingParticle, Particle, Rgb, palette};

use crate::session::GameSession;
use crate::store::ClientEvent;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::{Duration, Instant};
use tictactoe_board::{Coordinate, Marker, find_winning_line};
use tracing::{debug, info, instrument};

/// How long an AI reply stays highlighted.
pub const AI_HIGHLIGHT: Duration = Duration::from_secs(1);

/// How a single cell should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellView {
    /// Marker shown, if any.
    pub marker: Option<Marker>,
    /// Part of the winning line.
    pub winning: bool,
    /// Where the AI just answered.
    pub ai_reply: bool,
}

/// Persistent end-of-game message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Announcement {
    /// Somebody won.
    Winner(Marker),
    /// Board filled without a line.
    Draw,
}

impl Announcement {
    /// Text shown to the user.
    pub fn text(&self) -> String {
        match self {
            Announcement::Winner(marker) => format!("🎉 Player {marker} Wins! 🎉"),
            Announcement::Draw => "It's a Draw!".to_string(),
        }
    }
}

/// Everything a front end needs to draw, minus the confetti.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scene {
    /// Cells in row-major order.
    pub cells: [[CellView; 3]; 3],
    /// Status line.
    pub status: String,
    /// Marker to move, while the game runs.
    pub turn: Option<Marker>,
    /// End-of-game message, at most one at a time.
    pub announcement: Option<Announcement>,
}

impl Scene {
    /// View of the cell at `coord`.
    pub fn cell(&self, coord: Coordinate) -> CellView {
        self.cells[usize::from(coord.row())][usize::from(coord.col())]
    }

    fn cell_mut(&mut self, coord: Coordinate) -> &mut CellView {
        &mut self.cells[usize::from(coord.row())][usize::from(coord.col())]
    }
}

/// Observer of the store's event stream.
pub struct PresentationDriver {
    scene: Scene,
    last_rendered: Option<GameSession>,
    celebration: Option<Celebration>,
    ai_highlight: Option<(Coordinate, Instant)>,
    rng: SmallRng,
}

impl Default for PresentationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationDriver {
    /// Creates a driver with an empty scene.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// Creates a driver with reproducible confetti.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Self {
            scene: Scene::default(),
            last_rendered: None,
            celebration: None,
            ai_highlight: None,
            rng,
        }
    }

    /// Current scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Running confetti burst, if any.
    pub fn celebration(&self) -> Option<&Celebration> {
        self.celebration.as_ref()
    }

    /// Applies one event from the store.
    #[instrument(skip(self, event, now))]
    pub fn handle_event(&mut self, event: ClientEvent, now: Instant) {
        match event {
            ClientEvent::SessionReplaced(session) => self.render(&session, now),
            ClientEvent::AiMoved(coord) => {
                debug!(coord = %coord, "Highlighting AI reply");
                self.ai_highlight = Some((coord, now + AI_HIGHLIGHT));
                self.apply_highlight();
            }
            ClientEvent::AnnouncementCleared => {
                self.scene.announcement = None;
            }
            ClientEvent::InitFailed(message) => {
                self.scene.status = message;
            }
        }
    }

    /// Redraws the scene from a mirror.
    ///
    /// Rendering an identical mirror again yields the same scene and does not
    /// restart the confetti.
    #[instrument(skip_all, fields(session_id = %session.id()))]
    pub fn render(&mut self, session: &GameSession, now: Instant) {
        let repeat = self.last_rendered.as_ref() == Some(session);
        let state = session.state();

        let mut scene = Scene::default();
        for coord in Coordinate::ALL {
            scene.cell_mut(coord).marker = state.board().get(coord).marker();
        }

        if !session.is_terminal() {
            scene.status = format!("Player {}'s turn", state.active());
            scene.turn = Some(*state.active());
            self.celebration = None;
        } else if let Some(winner) = *state.winner() {
            if let Some(line) = find_winning_line(state.board()) {
                for coord in line.cells() {
                    scene.cell_mut(coord).winning = true;
                }
            }
            scene.status = format!("Player {winner} wins!");
            scene.announcement = Some(Announcement::Winner(winner));
            if !repeat {
                info!(winner = %winner, "Announcing winner");
                self.celebration = Some(Celebration::burst(winner, now, &mut self.rng));
            }
        } else {
            info!("Announcing draw");
            scene.status = "It's a draw!".to_string();
            scene.announcement = Some(Announcement::Draw);
            self.celebration = None;
        }

        self.scene = scene;
        self.last_rendered = Some(session.clone());
        self.apply_highlight();
    }

    /// Expires the AI highlight and the confetti.
    #[instrument(skip(self))]
    pub fn tick(&mut self, now: Instant) {
        if matches!(self.ai_highlight, Some((_, until)) if now >= until) {
            self.ai_highlight = None;
            self.apply_highlight();
        }
        if self.celebration.as_ref().is_some_and(|c| c.is_expired(now)) {
            debug!("Confetti finished");
            self.celebration = None;
        }
    }

    /// True while something on screen is still moving.
    pub fn is_animating(&self) -> bool {
        self.celebration.is_some() || self.ai_highlight.is_some()
    }

    fn apply_highlight(&mut self) {
        let target = self.ai_highlight.map(|(coord, _)| coord);
        for coord in Coordinate::ALL {
            self.scene.cell_mut(coord).ai_reply = Some(coord) == target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::session::{SessionId, SessionState};
    use tictactoe_board::Board;

    fn session(
        rows: [[Option<Marker>; 3]; 3],
        active: Marker,
        winner: Option<Marker>,
        terminal: bool,
    ) -> GameSession {
        GameSession::new(
            SessionId::from("1"),
            SessionState::new(Board::from_rows(rows), active, winner, terminal),
            Configuration::default(),
        )
    }

    const X: Option<Marker> = Some(Marker::X);
    const O: Option<Marker> = Some(Marker::O);
    const E: Option<Marker> = None;

    #[test]
    fn test_running_game_shows_turn() {
        let mut driver = PresentationDriver::with_seed(0);
        let opened = session([[X, E, E], [E, E, E], [E, E, E]], Marker::O, None, false);
        driver.render(&opened, Instant::now());
        assert_eq!(driver.scene().status, "Player O's turn");
        assert_eq!(driver.scene().turn, Some(Marker::O));
        assert_eq!(driver.scene().announcement, None);
        assert!(driver.celebration().is_none());
    }

    #[test]
    fn test_win_marks_line_and_celebrates() {
        let mut driver = PresentationDriver::with_seed(0);
        let won = session([[X, X, X], [O, O, E], [E, E, E]], Marker::X, X, true);
        driver.render(&won, Instant::now());

        let scene = driver.scene();
        assert_eq!(scene.announcement, Some(Announcement::Winner(Marker::X)));
        assert_eq!(scene.status, "Player X wins!");
        assert_eq!(scene.turn, None);
        let winning: Vec<_> = Coordinate::ALL
            .into_iter()
            .filter(|c| scene.cell(*c).winning)
            .collect();
        assert_eq!(winning.len(), 3);
        assert!(winning.iter().all(|c| c.row() == 0));
        assert_eq!(driver.celebration().map(Celebration::winner), Some(Marker::X));
    }

    #[test]
    fn test_new_game_clears_terminal_decorations() {
        let mut driver = PresentationDriver::with_seed(0);
        let now = Instant::now();
        driver.render(&session([[O, O, O], [X, X, E], [X, E, E]], Marker::O, O, true), now);
        driver.render(&session([[E; 3]; 3], Marker::X, None, false), now);

        assert_eq!(driver.scene().announcement, None);
        assert!(Coordinate::ALL.iter().all(|c| !driver.scene().cell(*c).winning));
        assert!(driver.celebration().is_none());
    }

    #[test]
    fn test_ai_highlight_expires() {
        let mut driver = PresentationDriver::with_seed(0);
        let now = Instant::now();
        let center = Coordinate::new(1, 1).expect("on board");
        driver.render(&session([[X, E, E], [E, O, E], [E, E, E]], Marker::X, None, false), now);
        driver.handle_event(ClientEvent::AiMoved(center), now);
        assert!(driver.scene().cell(center).ai_reply);

        driver.tick(now + Duration::from_millis(500));
        assert!(driver.scene().cell(center).ai_reply);
        driver.tick(now + AI_HIGHLIGHT);
        assert!(!driver.scene().cell(center).ai_reply);
        assert!(!driver.is_animating());
    }

    #[test]
    fn test_init_failure_only_sets_status() {
        let mut driver = PresentationDriver::with_seed(0);
        driver.handle_event(ClientEvent::InitFailed("nope".to_string()), Instant::now());
        let expected = Scene {
            status: "nope".to_string(),
            ..Scene::default()
        };
        assert_eq!(driver.scene(), &expected);
    }
}
