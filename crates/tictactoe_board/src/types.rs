//! Core board types.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Marker a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Marker {
    /// Marker X (moves first).
    X,
    /// Marker O.
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Cell holds a marker.
    Occupied(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }

    /// True when nothing has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Option<Marker>> for Cell {
    fn from(marker: Option<Marker>) -> Self {
        marker.map_or(Cell::Empty, Cell::Occupied)
    }
}

/// Coordinate outside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("coordinate ({row}, {col}) is outside the 3x3 board")]
pub struct CoordinateError {
    /// Requested row.
    pub row: u8,
    /// Requested column.
    pub col: u8,
}

/// A `(row, col)` position on the board, both in `0..=2`.
///
/// Serialized as a two-element array, which is how the server reports the
/// AI's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
#[display("({row}, {col})")]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// All nine coordinates in row-major order.
    pub const ALL: [Coordinate; 9] = [
        Coordinate::at(0, 0),
        Coordinate::at(0, 1),
        Coordinate::at(0, 2),
        Coordinate::at(1, 0),
        Coordinate::at(1, 1),
        Coordinate::at(1, 2),
        Coordinate::at(2, 0),
        Coordinate::at(2, 1),
        Coordinate::at(2, 2),
    ];

    /// Creates a coordinate, rejecting anything off the board.
    pub fn new(row: u8, col: u8) -> Result<Self, CoordinateError> {
        if row < 3 && col < 3 {
            Ok(Self { row, col })
        } else {
            Err(CoordinateError { row, col })
        }
    }

    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        usize::from(self.row) * 3 + usize::from(self.col)
    }

    /// Row, top to bottom.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column, left to right.
    pub fn col(self) -> u8 {
        self.col
    }
}

impl TryFrom<(u8, u8)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (u8, u8) {
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

/// Grid as it appears on the wire: rows of `"X" | "O" | null`.
type WireRows = [[Option<Marker>; 3]; 3];

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "WireRows", into = "WireRows")]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from rows of optional markers.
    pub fn from_rows(rows: [[Option<Marker>; 3]; 3]) -> Self {
        Self {
            cells: rows.map(|row| row.map(Cell::from)),
        }
    }

    /// Gets the cell at `coord`.
    pub fn get(&self, coord: Coordinate) -> Cell {
        self.cells[usize::from(coord.row)][usize::from(coord.col)]
    }

    /// Returns a copy of this board with `coord` set to `cell`.
    pub fn with(mut self, coord: Coordinate, cell: Cell) -> Self {
        self.cells[usize::from(coord.row)][usize::from(coord.col)] = cell;
        self
    }

    /// Checks whether `coord` is empty.
    pub fn is_empty(&self, coord: Coordinate) -> bool {
        self.get(coord).is_empty()
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        Coordinate::ALL
            .iter()
            .filter(|coord| self.get(**coord) == Cell::Occupied(marker))
            .count()
    }

    /// True when no cell holds a marker.
    pub fn is_clear(&self) -> bool {
        Coordinate::ALL.iter().all(|coord| self.is_empty(*coord))
    }
}

impl From<WireRows> for Board {
    fn from(rows: WireRows) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Board> for WireRows {
    fn from(board: Board) -> Self {
        board.cells.map(|row| row.map(Cell::marker))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                f.write_str("/")?;
            }
            for cell in row {
                match cell.marker() {
                    Some(marker) => write!(f, "{marker}")?,
                    None => f.write_str(".")?,
                }
            }
        }
        Ok(())
    }
}
