//! Tic-tac-toe game engine.
//!
//! A turn-based state machine for 3x3 tic-tac-toe with running scores
//! across rounds. The engine owns one immutable [`GameState`] at a time and
//! replaces it whole on every accepted move or reset, so a presentation layer
//! can read a consistent snapshot after each command.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameEngine, GameStatus, LineType, Player};
//!
//! let mut engine = GameEngine::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     assert!(engine.make_move(row, col)?);
//! }
//!
//! let state = engine.state();
//! assert_eq!(state.status(), GameStatus::Won(Player::X));
//! assert_eq!(state.winning_line().map(|l| l.kind()), Some(LineType::Horizontal));
//! assert_eq!(state.score_x(), 1);
//!
//! // The round is over: further moves are rejected.
//! assert!(!engine.make_move(2, 2)?);
//! # Ok::<(), strictly_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod invariants;
mod line;
mod position;
mod rules;
mod shared;
mod types;

pub use action::{Move, MoveError, MoveOutcome};
pub use contracts::{
    CellIsEmpty, Contract, GameNotOver, LegalMove, MonotonicBoard, MoveContract, ScoreStep,
};
pub use engine::GameEngine;
pub use invariants::{
    EngineInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    TerminalConsistentInvariant, WinnerMatchesLineInvariant,
};
pub use line::{LineType, WinningLine};
pub use position::Position;
pub use rules::{check_win, is_full};
pub use shared::SharedEngine;
pub use types::{Board, Cell, GameState, GameStatus, Player};
