//! Terminal consistency: the round is over exactly when it was won or drawn.

use super::Invariant;
use crate::types::GameState;

/// Invariant: `game_over` holds iff a winning line exists or the board is full.
pub struct TerminalConsistentInvariant;

impl Invariant<GameState> for TerminalConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let terminal = state.winning_line().is_some() || state.board().is_full();
        state.is_game_over() == terminal
    }

    fn description() -> &'static str {
        "Game is over exactly when a line is complete or the board is full"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(TerminalConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_won_game_holds() {
        let engine = GameEngine::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap();
        assert!(engine.state().is_game_over());
        assert!(TerminalConsistentInvariant::holds(engine.state()));
    }

    #[test]
    fn test_premature_game_over_violates() {
        let mut state = GameState::new();
        state.game_over = true;
        assert!(!TerminalConsistentInvariant::holds(&state));
    }
}
