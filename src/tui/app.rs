//! Terminal application state: cursor and key bindings.

use super::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_board::Coordinate;
use tracing::debug;

/// What a key press asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a marker.
    Move(Coordinate),
    /// Clear the current board.
    Reset,
    /// Start a session with the pending settings.
    NewGame,
    /// Switch the AI on or off (pending).
    ToggleAi,
    /// Let the AI play the other marker (pending).
    SwitchSide,
    /// Next difficulty (pending).
    CycleDifficulty,
    /// Leave the program.
    Quit,
}

/// Cursor position and key handling.
#[derive(Debug, Clone)]
pub struct App {
    cursor: Coordinate,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates an app with the cursor in the centre.
    pub fn new() -> Self {
        Self {
            cursor: Coordinate::ALL[4],
        }
    }

    /// Current cursor cell.
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// Updates the cursor or returns the command bound to `key`.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Command> {
        debug!(?key, "Handling key");
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Move(self.cursor)),
            KeyCode::Char(c) if c.is_ascii_digit() => digit_cell(c).map(|coord| {
                self.cursor = coord;
                Command::Move(coord)
            }),
            KeyCode::Char('r') => Some(Command::Reset),
            KeyCode::Char('n') => Some(Command::NewGame),
            KeyCode::Char('a') => Some(Command::ToggleAi),
            KeyCode::Char('s') => Some(Command::SwitchSide),
            KeyCode::Char('d') => Some(Command::CycleDifficulty),
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }
}
