//! Moves, move outcomes and move errors.
//!
//! Moves are domain events, not side effects. The engine records every
//! accepted move in the round history and reports what it caused.

use crate::line::WinningLine;
use crate::position::Position;
use crate::types::Player;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the mark was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// What an accepted move did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The round continues; `next` moves now.
    Continue {
        /// Player to move next.
        next: Player,
    },
    /// The mover completed a line.
    Won {
        /// The player who moved and won.
        winner: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// The board filled up with no line.
    Drawn,
}

impl MoveOutcome {
    /// Returns true if the move ended the round.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue { .. })
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates outside the 3x3 grid. A caller bug, never a rejection.
    #[display("Coordinates ({}, {}) are outside the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The round is already over.
    #[display("Game is already over")]
    GameOver,

    /// The cell is already occupied.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// A postcondition failed; the move was discarded.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// Returns true for the ordinary "move not allowed" outcomes.
    ///
    /// Rejections leave the state untouched and are reported as `false` by
    /// [`crate::GameEngine::make_move`]; everything else is a bug.
    pub fn is_rejection(&self) -> bool {
        matches!(self, MoveError::GameOver | MoveError::CellOccupied(_))
    }
}

impl std::error::Error for MoveError {}
