//! Keyboard mapping for the board.

use crossterm::event::KeyCode;
use tictactoe_board::Coordinate;

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Coordinate, key: KeyCode) -> Coordinate {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Coordinate::new(row, col).unwrap_or(cursor)
}

/// Maps keys `1`-`9` to cells in reading order.
pub fn digit_cell(c: char) -> Option<Coordinate> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Coordinate::from_index)
}
