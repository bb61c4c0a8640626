//! Stateless drawing of a [`Scene`] with ratatui.

use crate::config::Configuration;
use crate::presentation::{Announcement, CellView, Celebration, Rgb, Scene};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;
use tictactoe_board::{Coordinate, Marker};

/// Everything [`draw`] reads.
pub struct View<'a> {
    /// Scene from the presentation driver.
    pub scene: &'a Scene,
    /// Running confetti, if any.
    pub celebration: Option<&'a Celebration>,
    /// Keyboard cursor.
    pub cursor: Coordinate,
    /// Settings for the next new game.
    pub pending: &'a Configuration,
    /// Frame time.
    pub now: Instant,
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, view: &View<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Settings
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let board_area = center_rect(chunks[1], 40, 11);
    draw_board(frame, board_area, view);

    let mut status = vec![Span::styled(
        view.scene.status.clone(),
        Style::default().fg(Color::Yellow),
    )];
    if let Some(announcement) = &view.scene.announcement {
        status.push(Span::raw("   "));
        status.push(Span::styled(announcement.text(), announcement_style(announcement)));
    }
    let status = Paragraph::new(Line::from(status))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let settings = Paragraph::new(format!("Next game: {}", view.pending.summary()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Settings"));
    frame.render_widget(settings, chunks[3]);

    let help = Paragraph::new(concat!(
        "Arrows/1-9: select | Enter: move | R: reset | N: new game | ",
        "A/S/D: AI on, side, level | Q: quit",
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[4]);

    if let Some(celebration) = view.celebration {
        draw_confetti(frame, chunks[1], celebration, view.now);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    for row in 0..3u8 {
        draw_row(frame, rows[usize::from(row) * 2], view, row);
        if row < 2 {
            draw_separator(frame, rows[usize::from(row) * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, view: &View<'_>, row: u8) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3u8 {
        if let Ok(coord) = Coordinate::new(row, col) {
            let area = cols[usize::from(col) * 2];
            draw_cell(frame, area, view.scene.cell(coord), coord == view.cursor);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[usize::from(col) * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: CellView, under_cursor: bool) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let (symbol, mut style) = match cell.marker {
        None => ("   ", Style::default().fg(Color::DarkGray)),
        Some(Marker::X) => (" X ", bold.fg(Color::Blue)),
        Some(Marker::O) => (" O ", bold.fg(Color::Red)),
    };

    if cell.winning {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if cell.ai_reply {
        style = style.bg(Color::Magenta);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let lines = vec![Line::default(), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(usize::from(area.width)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); usize::from(area.height)])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn announcement_style(announcement: &Announcement) -> Style {
    let color = match announcement {
        Announcement::Winner(Marker::X) => Color::Blue,
        Announcement::Winner(Marker::O) => Color::Red,
        Announcement::Draw => Color::White,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Paints falling particles straight into the buffer over `area`.
fn draw_confetti(frame: &mut Frame, area: Rect, celebration: &Celebration, now: Instant) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let buf = frame.buffer_mut();
    for falling in celebration.falling(now) {
        let x = area.x + (falling.particle.x * f32::from(area.width - 1)) as u16;
        let y = area.y + (falling.progress * f32::from(area.height - 1)) as u16;
        let Rgb(r, g, b) = falling.particle.color;
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(if falling.particle.round { "●" } else { "■" })
                .set_fg(Color::Rgb(r, g, b));
        }
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::PresentationDriver;
    use crate::session::{GameSession, SessionId, SessionState};
    use ratatui::{Terminal, backend::TestBackend};
    use tictactoe_board::Board;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draws_status_and_settings() {
        let mut driver = PresentationDriver::with_seed(3);
        let session = GameSession::new(
            SessionId::from("1"),
            SessionState::initial(),
            Configuration::default(),
        );
        let now = Instant::now();
        driver.render(&session, now);

        let pending = Configuration::default();
        let view = View {
            scene: driver.scene(),
            celebration: driver.celebration(),
            cursor: Coordinate::ALL[4],
            pending: &pending,
            now,
        };
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test backend");
        terminal.draw(|f| draw(f, &view)).expect("draws");

        let text = screen_text(&terminal);
        assert!(text.contains("Player X's turn"));
        assert!(text.contains("Next game: AI plays O (medium)"));
    }

    #[test]
    fn test_draws_winner_with_confetti() {
        let mut driver = PresentationDriver::with_seed(3);
        let x = Some(Marker::X);
        let session = GameSession::new(
            SessionId::from("1"),
            SessionState::new(
                Board::from_rows([[x, x, x], [None; 3], [None; 3]]),
                Marker::X,
                x,
                true,
            ),
            Configuration::default(),
        );
        let now = Instant::now();
        driver.render(&session, now);

        let pending = Configuration::default();
        let view = View {
            scene: driver.scene(),
            celebration: driver.celebration(),
            cursor: Coordinate::ALL[0],
            pending: &pending,
            now,
        };
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test backend");
        terminal.draw(|f| draw(f, &view)).expect("draws");

        let text = screen_text(&terminal);
        assert!(text.contains("Player X wins!"));
        assert!(text.contains('●') || text.contains('■'));
    }
}
