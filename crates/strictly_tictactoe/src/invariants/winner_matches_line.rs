//! Winner and winning line agree.

use super::Invariant;
use crate::types::GameState;

/// Invariant: a winner is recorded iff a winning line is, and every cell of
/// that line holds the winner's mark.
pub struct WinnerMatchesLineInvariant;

impl Invariant<GameState> for WinnerMatchesLineInvariant {
    fn holds(state: &GameState) -> bool {
        match (state.winner(), state.winning_line()) {
            (None, None) => true,
            (Some(winner), Some(line)) => line
                .cells()
                .iter()
                .all(|pos| state.board().get(*pos).player() == Some(winner)),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Winner is set exactly when a winning line of their marks is set"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Player, Position};

    fn x_wins_top_row() -> GameState {
        GameEngine::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap()
        .state()
        .clone()
    }

    #[test]
    fn test_won_game_holds() {
        assert!(WinnerMatchesLineInvariant::holds(&x_wins_top_row()));
    }

    #[test]
    fn test_wrong_winner_violates() {
        let mut state = x_wins_top_row();
        state.winner = Some(Player::O);
        assert!(!WinnerMatchesLineInvariant::holds(&state));
    }

    #[test]
    fn test_winner_without_line_violates() {
        let mut state = x_wins_top_row();
        state.winning_line = None;
        assert!(!WinnerMatchesLineInvariant::holds(&state));
    }
}
