//! Text rendering of engine state.

use strictly_tictactoe::{GameState, GameStatus, Player};

/// Board, status line and score as shown after every command.
pub fn render_state(state: &GameState, hints: bool) -> String {
    let mut out = state.board().display(hints);
    out.push_str("\n\n");
    out.push_str(&state.status_line());
    if let Some(line) = state.winning_line() {
        let cells: Vec<_> = line.cells().iter().map(|p| p.label()).collect();
        out.push_str(&format!(" ({})", cells.join(", ")));
    }
    out.push('\n');
    out.push_str(&render_score(state));
    out
}

/// Score line, e.g. `Score  X: 2  O: 1`.
pub fn render_score(state: &GameState) -> String {
    format!(
        "Score  X: {}  O: {}",
        state.score(Player::X),
        state.score(Player::O)
    )
}

/// Short hint after a round ends.
pub fn round_over_hint(state: &GameState) -> Option<&'static str> {
    match state.status() {
        GameStatus::InProgress => None,
        GameStatus::Won(_) | GameStatus::Drawn => {
            Some("Round over. Type `reset` for a new round or `quit` to leave.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{GameEngine, Position};

    #[test]
    fn test_render_new_game() {
        let text = render_state(&GameState::new(), true);
        assert!(text.starts_with("1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9"));
        assert!(text.contains("Player X's turn"));
        assert!(text.ends_with("Score  X: 0  O: 0"));
    }

    #[test]
    fn test_render_win_names_line() {
        let engine = GameEngine::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap();
        let text = render_state(engine.state(), false);

        assert!(text.starts_with("X|X|X\n-+-+-\nO|O| \n-+-+-\n | | "));
        assert!(text.contains("Player X wins! (Top-left, Top-center, Top-right)"));
        assert!(round_over_hint(engine.state()).is_some());
    }
}
