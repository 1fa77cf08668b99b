//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} move {Q}`. The engine checks both around every move and publishes
//! the new state only when both hold.

use crate::action::MoveError;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::position::Position;
use crate::types::{GameState, Player};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions relating the state before and after.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the round has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the round is won or drawn.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_game_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects a move onto a marked cell.
    pub fn check(position: Position, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(position))
        }
    }
}

/// Composite precondition, checked in order: round running, then cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(position: Position, state: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        CellIsEmpty::check(position, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: marks are never removed or changed by a move.
pub struct MonotonicBoard;

impl MonotonicBoard {
    /// True when every marked cell of `before` is unchanged in `after`.
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        Position::ALL.into_iter().all(|pos| {
            let cell = before.board().get(pos);
            cell.is_empty() || after.board().get(pos) == cell
        })
    }
}

/// Postcondition: only the winner's score moves, and by at most one.
pub struct ScoreStep;

impl ScoreStep {
    /// True when scores changed only as a win for `after.winner()` allows.
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        [Player::X, Player::O].into_iter().all(|player| {
            let (old, new) = (before.score(player), after.score(player));
            if after.winner() == Some(player) && !before.is_game_over() {
                new == old.saturating_add(1)
            } else {
                new == old
            }
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Round is not over
/// - Cell is empty
///
/// Postconditions:
/// - Board is monotonic
/// - Scores move only for the winner, by one
/// - All [`EngineInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(state: &GameState, action: &Position) -> Result<(), MoveError> {
        LegalMove::check(*action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if !MonotonicBoard::holds(before, after) {
            warn!("Board monotonicity violated");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: a marked cell changed".to_string(),
            ));
        }

        if !ScoreStep::holds(before, after) {
            warn!(
                before_x = before.score_x(),
                before_o = before.score_o(),
                after_x = after.score_x(),
                after_o = after.score_o(),
                "Score step violated"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: scores changed without a win".to_string(),
            ));
        }

        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "State invariants violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
