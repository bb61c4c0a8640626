//! Line-of-three detection.

use crate::types::{Board, Cell, Coordinate, Marker};
use tracing::instrument;

/// Position of a row or column on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Lane {
    /// Top row or left column.
    #[display("0")]
    First,
    /// Middle row or column.
    #[display("1")]
    Second,
    /// Bottom row or right column.
    #[display("2")]
    Third,
}

impl Lane {
    /// All lanes, top/left first.
    pub const ALL: [Lane; 3] = [Lane::First, Lane::Second, Lane::Third];

    /// Zero-based index of the lane.
    pub const fn index(self) -> u8 {
        match self {
            Lane::First => 0,
            Lane::Second => 1,
            Lane::Third => 2,
        }
    }
}

/// One of the eight lines that win the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum WinPattern {
    /// A row, top to bottom.
    #[display("row {_0}")]
    Row(Lane),
    /// A column, left to right.
    #[display("column {_0}")]
    Column(Lane),
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// Every winning line, in detection order: rows, then columns, then diagonals.
pub const WIN_PATTERNS: [WinPattern; 8] = [
    WinPattern::Row(Lane::First),
    WinPattern::Row(Lane::Second),
    WinPattern::Row(Lane::Third),
    WinPattern::Column(Lane::First),
    WinPattern::Column(Lane::Second),
    WinPattern::Column(Lane::Third),
    WinPattern::Diagonal,
    WinPattern::AntiDiagonal,
];

impl WinPattern {
    /// The three coordinates making up this line.
    pub const fn cells(self) -> [Coordinate; 3] {
        match self {
            WinPattern::Row(lane) => {
                let r = lane.index();
                [Coordinate::at(r, 0), Coordinate::at(r, 1), Coordinate::at(r, 2)]
            }
            WinPattern::Column(lane) => {
                let c = lane.index();
                [Coordinate::at(0, c), Coordinate::at(1, c), Coordinate::at(2, c)]
            }
            WinPattern::Diagonal => [
                Coordinate::at(0, 0),
                Coordinate::at(1, 1),
                Coordinate::at(2, 2),
            ],
            WinPattern::AntiDiagonal => [
                Coordinate::at(0, 2),
                Coordinate::at(1, 1),
                Coordinate::at(2, 0),
            ],
        }
    }

    /// True if `coord` lies on this line.
    pub fn contains(self, coord: Coordinate) -> bool {
        self.cells().contains(&coord)
    }

    /// The marker filling this line on `board`, if all three cells match.
    pub fn owner(self, board: &Board) -> Option<Marker> {
        let [a, b, c] = self.cells();
        let first = board.get(a);
        match first {
            Cell::Occupied(marker) if board.get(b) == first && board.get(c) == first => {
                Some(marker)
            }
            _ => None,
        }
    }
}

/// Finds the first complete line on the board.
///
/// Lines are checked in [`WIN_PATTERNS`] order, so if more than one is
/// complete the row wins over the column and the column over the diagonal.
/// Whether the board is full is not considered here.
#[instrument(skip(board), fields(board = %board))]
pub fn find_winning_line(board: &Board) -> Option<WinPattern> {
    WIN_PATTERNS
        .into_iter()
        .find(|pattern| pattern.owner(board).is_some())
}

/// The marker owning the first complete line, if any.
#[instrument(skip(board), fields(board = %board))]
pub fn winner_of(board: &Board) -> Option<Marker> {
    find_winning_line(board).and_then(|pattern| pattern.owner(board))
}
