//! Winning line descriptors.

use crate::position::Position;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Geometric kind of a three-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum LineType {
    /// A full row.
    Horizontal,
    /// A full column.
    Vertical,
    /// Top-left to bottom-right.
    DiagonalTopLeft,
    /// Top-right to bottom-left.
    DiagonalTopRight,
}

/// The line that completed a win.
///
/// Start and end are the two outer cells; the middle cell is implied by the
/// line type, so all three cells can be recovered with [`WinningLine::cells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct WinningLine {
    kind: LineType,
    start: Position,
    end: Position,
}

/// Every line on the board, in the order wins are checked:
/// rows top to bottom, columns left to right, then the two diagonals.
pub(crate) const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine::new(LineType::Horizontal, Position::TopLeft, Position::TopRight),
    WinningLine::new(LineType::Horizontal, Position::MiddleLeft, Position::MiddleRight),
    WinningLine::new(LineType::Horizontal, Position::BottomLeft, Position::BottomRight),
    // Columns
    WinningLine::new(LineType::Vertical, Position::TopLeft, Position::BottomLeft),
    WinningLine::new(LineType::Vertical, Position::TopCenter, Position::BottomCenter),
    WinningLine::new(LineType::Vertical, Position::TopRight, Position::BottomRight),
    // Diagonals
    WinningLine::new(LineType::DiagonalTopLeft, Position::TopLeft, Position::BottomRight),
    WinningLine::new(LineType::DiagonalTopRight, Position::TopRight, Position::BottomLeft),
];

impl WinningLine {
    const fn new(kind: LineType, start: Position, end: Position) -> Self {
        Self { kind, start, end }
    }

    /// Line type.
    pub fn kind(&self) -> LineType {
        self.kind
    }

    /// Row of the first cell.
    pub fn start_row(&self) -> usize {
        self.start.row()
    }

    /// Column of the first cell.
    pub fn start_col(&self) -> usize {
        self.start.col()
    }

    /// Row of the last cell.
    pub fn end_row(&self) -> usize {
        self.end.row()
    }

    /// Column of the last cell.
    pub fn end_col(&self) -> usize {
        self.end.col()
    }

    /// The three cells of the line, start to end.
    pub fn cells(&self) -> [Position; 3] {
        [self.start, self.start.midpoint(self.end), self.end]
    }
}
