//! First-class invariants for the game state.
//!
//! Invariants are logical properties that every published [`crate::GameState`]
//! satisfies. The engine checks them after each accepted move, and they can
//! be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod history_consistent;
pub mod terminal_consistent;
pub mod winner_matches_line;

pub use history_consistent::HistoryConsistentInvariant;
pub use terminal_consistent::TerminalConsistentInvariant;
pub use winner_matches_line::WinnerMatchesLineInvariant;

/// Every invariant of a published [`crate::GameState`].
pub type EngineInvariants = (
    TerminalConsistentInvariant,
    WinnerMatchesLineInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, GameState, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(EngineInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let engine = GameEngine::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap();
        assert!(EngineInvariants::check_all(engine.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let engine = GameEngine::replay(&[Position::Center]).unwrap();
        let mut state = engine.state().clone();

        // Corrupt the board and the terminal flag together.
        state.board = state.board.with_mark(Position::TopLeft, Player::O);
        state.game_over = true;

        let violations = EngineInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (TerminalConsistentInvariant, WinnerMatchesLineInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
