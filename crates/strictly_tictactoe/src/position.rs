//! Validated board coordinates.
//!
//! Every cell of the 3x3 grid has exactly one `Position`, so a value of this
//! type is always in range. Raw `(row, col)` pairs from callers are checked
//! once at the boundary with [`Position::from_row_col`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A cell on the tic-tac-toe board, in row-major order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions, row-major.
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

    /// Creates a position from a zero-based row and column.
    ///
    /// Returns `None` when either coordinate is outside `0..3`.
    #[instrument]
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Creates a position from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// The cell halfway between two positions on a straight line.
    ///
    /// Only meaningful for the two ends of a row, column or diagonal.
    pub(crate) fn midpoint(self, other: Position) -> Position {
        Self::ALL[(self.to_index() + other.to_index()) / 2]
    }

    /// Label for display.
    pub fn label(&self) -> &'static str {
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

    /// Parses a 1-based cell number (`1`-`9`) or a label.
    ///
    /// Labels are matched case-insensitively and treat `-`, `_` and spaces
    /// alike, so `"top left"`, `"TOP_LEFT"` and `"top-left"` are the same cell.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let wanted = normalize(s);
        Position::iter().find(|pos| normalize(pos.label()) == wanted)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_round_trip_covers_grid() {
        for row in 0..3 {
            for col in 0..3 {
                let pos = Position::from_row_col(row, col).unwrap();
                assert_eq!((pos.row(), pos.col()), (row, col));
            }
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(Position::from_row_col(3, 0), None);
        assert_eq!(Position::from_row_col(0, 3), None);
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(Position::TopLeft.midpoint(Position::TopRight), Position::TopCenter);
        assert_eq!(Position::TopRight.midpoint(Position::BottomLeft), Position::Center);
        assert_eq!(Position::TopRight.midpoint(Position::BottomRight), Position::MiddleRight);
    }

    #[test]
    fn test_parse_numbers_and_labels() {
        assert_eq!(Position::from_label_or_number("1"), Some(Position::TopLeft));
        assert_eq!(Position::from_label_or_number("9"), Some(Position::BottomRight));
        assert_eq!(Position::from_label_or_number("0"), None);
        assert_eq!(Position::from_label_or_number("10"), None);
        assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number("Top Center"), Some(Position::TopCenter));
        assert_eq!(Position::from_label_or_number("bottom_right"), Some(Position::BottomRight));
        assert_eq!(Position::from_label_or_number("middle"), None);
    }
}
