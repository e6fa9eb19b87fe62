//! Board cell addresses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Direction;

/// Number of addressable rows (`A` through `Z`).
pub const MAX_ROWS: u8 = 26;

/// Address of one hex cell: a row letter and a column number.
///
/// Maps use the doubled-column layout common to 18xx boards, so cells in
/// the same row are two columns apart and diagonal neighbors are one
/// column apart. Ordering is by row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coordinate {
    row: u8,
    col: u16,
}

/// Why a coordinate string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid coordinate {raw:?}: {reason}")]
pub struct ParseCoordinateError {
    /// The rejected input.
    pub raw: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl Coordinate {
    /// Create a coordinate from a zero-based row index and a one-based column.
    #[must_use]
    pub const fn new(row: u8, col: u16) -> Option<Self> {
        if row < MAX_ROWS && col >= 1 { Some(Self { row, col }) } else { None }
    }

    /// Zero-based row index (`A` = 0).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Row letter.
    #[must_use]
    pub const fn row_letter(self) -> char {
        (b'A' + self.row) as char
    }

    /// One-based column number.
    #[must_use]
    pub const fn col(self) -> u16 {
        self.col
    }

    /// The cell across the given side, or `None` if it falls outside the
    /// addressable grid. Whether the result is on a particular board is up
    /// to that board.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col): (i32, i32) = match direction.index() {
            0 => (1, -1),
            1 => (0, -2),
            2 => (-1, -1),
            3 => (-1, 1),
            4 => (0, 2),
            _ => (1, 1),
        };
        let row = u8::try_from(i32::from(self.row) + d_row).ok()?;
        let col = u16::try_from(i32::from(self.col) + d_col).ok()?;
        Self::new(row, col)
    }

    /// All six neighbors in direction order. Entries outside the grid are `None`.
    #[must_use]
    pub fn neighbors(self) -> [Option<Self>; 6] {
        Direction::ALL.map(|d| self.neighbor(d))
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let err = |reason| ParseCoordinateError {
            raw: raw.to_string(),
            reason,
        };

        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(|| err("empty"))?;
        if !letter.is_ascii_alphabetic() {
            return Err(err("row must be a letter A-Z"));
        }
        let row = u8::try_from(letter.to_ascii_uppercase()).map_err(|_| err("row must be a letter A-Z"))? - b'A';

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b: u8| b.is_ascii_digit()) {
            return Err(err("column must be a positive number"));
        }
        let col: u16 = digits.parse().map_err(|_| err("column out of range"))?;

        Self::new(row, col).ok_or_else(|| err("column must be at least 1"))
    }
}

impl TryFrom<String> for Coordinate {
    type Error = ParseCoordinateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Coordinate> for String {
    fn from(coord: Coordinate) -> Self {
        coord.to_string()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(raw: &str) -> Coordinate {
        raw.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let coord = c("c5");
        assert_eq!(coord.row(), 2);
        assert_eq!(coord.col(), 5);
        assert_eq!(coord.to_string(), "C5");
        assert_eq!(c(" D14 ").to_string(), "D14");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for raw in ["", "5C", "C", "C-1", "C0", "CC5", "C5x", "C99999999"] {
            assert!(raw.parse::<Coordinate>().is_err(), "{raw:?} should not parse");
        }
    }

    #[test]
    fn test_neighbors_clockwise() {
        let names: Vec<_> = c("C5")
            .neighbors()
            .iter()
            .map(|n| n.map(|n| n.to_string()).unwrap_or_default())
            .collect();
        assert_eq!(names, ["D4", "C3", "B4", "B6", "C7", "D6"]);
    }

    #[test]
    fn test_neighbor_round_trip() {
        let origin = c("E9");
        for d in Direction::ALL {
            let there = origin.neighbor(d).unwrap();
            assert_eq!(there.neighbor(d.opposite()), Some(origin));
        }
    }

    #[test]
    fn test_neighbors_leave_grid() {
        let corner = c("A1");
        assert_eq!(corner.neighbor(Direction::ALL[1]), None);
        assert_eq!(corner.neighbor(Direction::ALL[2]), None);
        assert_eq!(corner.neighbor(Direction::ALL[3]), None);
        assert_eq!(corner.neighbor(Direction::ALL[5]).map(|n| n.to_string()), Some("B2".into()));
    }

    #[test]
    fn test_ordering_row_then_column() {
        let mut coords = vec![c("B2"), c("A13"), c("A3"), c("C1")];
        coords.sort();
        let names: Vec<_> = coords.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["A3", "A13", "B2", "C1"]);
    }
}
