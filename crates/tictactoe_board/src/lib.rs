//! Tic-tac-toe board types and outcome detection.
//!
//! This crate holds no game rules beyond line detection: the board is a
//! mirror of state owned elsewhere, and the only question asked of it here is
//! whether some row, column or diagonal is complete.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod outcome;
mod types;

pub use outcome::{Lane, WIN_PATTERNS, WinPattern, find_winning_line, winner_of};
pub use types::{Board, Cell, Coordinate, CoordinateError, Marker};
