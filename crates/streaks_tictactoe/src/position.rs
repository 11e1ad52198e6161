//! Board addressing for tic-tac-toe.
//!
//! Every [`Position`] maps to exactly one 1-based [`Coordinate`] and back.
//! The mapping is a fixed lookup table.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A 1-based (row, column) pair on the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("({}, {})", row, column)]
pub struct Coordinate {
    /// Row, 1 (top) to 3 (bottom).
    pub row: u8,
    /// Column, 1 (left) to 3 (right).
    pub column: u8,
}

impl Coordinate {
    /// Creates a coordinate. No range check; see [`Position::from_coordinate`].
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Returns true if the coordinate lies on the main diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.column
    }
}

/// A cell on the tic-tac-toe board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 1, column 1.
    TopLeft,
    /// Row 1, column 2.
    TopCenter,
    /// Row 1, column 3.
    TopRight,
    /// Row 2, column 1.
    MiddleLeft,
    /// Row 2, column 2.
    Center,
    /// Row 2, column 3.
    MiddleRight,
    /// Row 3, column 1.
    BottomLeft,
    /// Row 3, column 2.
    BottomCenter,
    /// Row 3, column 3.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Returns the (row, column) pair of this position.
    pub const fn coordinate(self) -> Coordinate {
        match self {
            Position::TopLeft => Coordinate::new(1, 1),
            Position::TopCenter => Coordinate::new(1, 2),
            Position::TopRight => Coordinate::new(1, 3),
            Position::MiddleLeft => Coordinate::new(2, 1),
            Position::Center => Coordinate::new(2, 2),
            Position::MiddleRight => Coordinate::new(2, 3),
            Position::BottomLeft => Coordinate::new(3, 1),
            Position::BottomCenter => Coordinate::new(3, 2),
            Position::BottomRight => Coordinate::new(3, 3),
        }
    }

    /// Returns the row (1-3).
    pub const fn row(self) -> u8 {
        self.coordinate().row
    }

    /// Returns the column (1-3).
    pub const fn column(self) -> u8 {
        self.coordinate().column
    }

    /// Looks up the position at a coordinate.
    ///
    /// Returns `None` when either component is outside `1..=3`.
    pub const fn from_coordinate(coordinate: Coordinate) -> Option<Self> {
        match (coordinate.row, coordinate.column) {
            (1, 1) => Some(Position::TopLeft),
            (1, 2) => Some(Position::TopCenter),
            (1, 3) => Some(Position::TopRight),
            (2, 1) => Some(Position::MiddleLeft),
            (2, 2) => Some(Position::Center),
            (2, 3) => Some(Position::MiddleRight),
            (3, 1) => Some(Position::BottomLeft),
            (3, 2) => Some(Position::BottomCenter),
            (3, 3) => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// Shorthand for [`Position::from_coordinate`].
    pub const fn at(row: u8, column: u8) -> Option<Self> {
        Self::from_coordinate(Coordinate::new(row, column))
    }

    /// Converts position to row-major board index (0-8).
    pub const fn to_index(self) -> usize {
        let Coordinate { row, column } = self.coordinate();
        (row as usize - 1) * 3 + (column as usize - 1)
    }

    /// Creates position from row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Looks up a position by its label, ignoring case.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|pos| pos.label().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Text that does not name any board position.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Not a board position: {:?}", input)]
pub struct ParsePositionError {
    /// The rejected input.
    #[error(not(source))]
    pub input: String,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses `"row,col"` (optionally in parentheses), a board index `0-8`,
    /// or a label such as `"top-left"`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = || ParsePositionError {
            input: s.to_string(),
        };
        let trimmed = s.trim();

        if let Some((row, column)) = trimmed
            .trim_start_matches('(')
            .trim_end_matches(')')
            .split_once(',')
        {
            let row = row.trim().parse::<u8>().map_err(|_| reject())?;
            let column = column.trim().parse::<u8>().map_err(|_| reject())?;
            return Position::at(row, column).ok_or_else(reject);
        }

        if let Ok(index) = trimmed.parse::<usize>() {
            return Position::from_index(index).ok_or_else(reject);
        }

        Position::from_label(trimmed).ok_or_else(reject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_matches_all_order() {
        for (index, pos) in Position::ALL.into_iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_iter_matches_all() {
        let iterated: Vec<Position> = Position::iter().collect();
        assert_eq!(iterated, Position::ALL.to_vec());
    }

    #[test]
    fn test_coordinate_out_of_range() {
        assert_eq!(Position::at(0, 1), None);
        assert_eq!(Position::at(1, 4), None);
        assert_eq!(Position::at(4, 4), None);
    }

    #[test]
    fn test_main_diagonal() {
        assert!(Position::Center.coordinate().on_main_diagonal());
        assert!(!Position::TopRight.coordinate().on_main_diagonal());
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("2,3".parse::<Position>(), Ok(Position::MiddleRight));
        assert_eq!("(3, 1)".parse::<Position>(), Ok(Position::BottomLeft));
        assert_eq!("4".parse::<Position>(), Ok(Position::Center));
        assert_eq!("top-right".parse::<Position>(), Ok(Position::TopRight));
    }

    #[test]
    fn test_parse_rejects() {
        for input in ["", "9", "0,1", "a,b", "corner", "1,2,3"] {
            let err = input.parse::<Position>().unwrap_err();
            assert_eq!(err.input, input);
        }
    }
}
