//! History consistency: the round history explains the board.

use super::Invariant;
use crate::types::{Board, GameState, Player};

/// Invariant: replaying the history on an empty board reproduces the board.
///
/// Moves alternate X, O, X, ... starting with X, and no move lands on an
/// occupied cell. X has as many marks as O or one more. While the round
/// runs, the player to move is the one after the last move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut board = Board::new();
        let mut expected = Player::X;

        for mov in state.history() {
            if mov.player != expected || !board.is_empty(mov.position) {
                return false;
            }
            board = board.with_mark(mov.position, mov.player);
            expected = expected.opponent();
        }

        if board != *state.board() {
            return false;
        }

        let (xs, os) = (board.count(Player::X), board.count(Player::O));
        if xs != os && xs != os + 1 {
            return false;
        }

        match state.history().last() {
            None => state.current_player() == Player::X,
            Some(last) if state.is_game_over() => state.current_player() == last.player,
            Some(last) => state.current_player() == last.player.opponent(),
        }
    }

    fn description() -> &'static str {
        "Move history alternates from X and reproduces the board"
    }
}
