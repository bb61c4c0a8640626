//! Terminal front end.

mod app;
mod input;
mod ui;

pub use app::{App, Command};
pub use input::{digit_cell, move_cursor};
pub use ui::{View, draw};

use crate::config::ClientSettings;
use crate::controller::SessionController;
use crate::gateway::{RestGateway, ServerGateway};
use crate::presentation::PresentationDriver;
use crate::store::ClientEvent;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// Poll interval while confetti or a highlight is on screen.
const ANIMATION_TICK: Duration = Duration::from_millis(50);
/// Poll interval otherwise.
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Sends tracing output to `path` so it never lands on the screen.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the terminal client until the user quits.
pub async fn run_tui(settings: ClientSettings) -> Result<()> {
    init_file_logging(settings.log_file())?;
    info!(server_url = %settings.server_url(), "Starting tic-tac-toe client");

    let gateway = RestGateway::new(settings.server_url());
    let (controller, events) = SessionController::new(gateway, *settings.game());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, controller, events).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Client loop error");
    }
    res
}

/// Event loop: drain store events, draw, then wait for one key.
///
/// Commands are awaited in place, so only one request is ever in flight.
#[instrument(skip_all)]
async fn run_loop<G: ServerGateway>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut controller: SessionController<G>,
    mut events: mpsc::UnboundedReceiver<ClientEvent>,
) -> Result<()> {
    let mut app = App::new();
    let mut driver = PresentationDriver::new();

    // Failure is already published as an InitFailed event.
    let _ = controller.start_new_session().await;

    loop {
        let now = Instant::now();
        while let Ok(event) = events.try_recv() {
            driver.handle_event(event, now);
        }
        driver.tick(now);

        terminal.draw(|f| {
            let view = View {
                scene: driver.scene(),
                celebration: driver.celebration(),
                cursor: app.cursor(),
                pending: controller.store().configuration(),
                now,
            };
            draw(f, &view);
        })?;

        let timeout = if driver.is_animating() { ANIMATION_TICK } else { IDLE_TICK };
        if !event::poll(timeout)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(command) = app.handle_key(key.code) else {
            continue;
        };
        info!(?command, "Dispatching command");
        match command {
            Command::Quit => {
                info!("User quit");
                return Ok(());
            }
            Command::Move(coord) => {
                let outcome = controller.request_move(coord.row(), coord.col()).await;
                tracing::debug!(?outcome, "Move handled");
            }
            Command::Reset => {
                // Failure is logged by the controller; the board stays as it was.
                let _ = controller.reset().await;
            }
            Command::NewGame => {
                let _ = controller.start_new_session().await;
            }
            Command::ToggleAi => {
                let cfg = controller.store().configuration().toggle_ai();
                controller.set_configuration(cfg);
            }
            Command::SwitchSide => {
                let cfg = controller.store().configuration().switch_side();
                controller.set_configuration(cfg);
            }
            Command::CycleDifficulty => {
                let cfg = controller.store().configuration().cycle_difficulty();
                controller.set_configuration(cfg);
            }
        }
    }
}
