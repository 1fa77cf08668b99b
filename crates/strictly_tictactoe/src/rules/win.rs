//! Win detection logic for tic-tac-toe.

use crate::line::{LINES, WinningLine};
use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// Checks whether `mover` holds a complete line.
///
/// Lines are checked rows top to bottom, then columns left to right, then
/// the top-left and top-right diagonals. The first complete line is returned.
/// Only `mover`'s marks are considered.
#[instrument(skip(board))]
pub fn check_win(board: &Board, mover: Player) -> Option<WinningLine> {
    let mark = Cell::from(mover);
    LINES
        .into_iter()
        .find(|line| line.cells().iter().all(|pos| board.get(*pos) == mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LineType, Position};

    fn mark_all(positions: &[Position], player: Player) -> Board {
        positions
            .iter()
            .fold(Board::new(), |board, pos| board.with_mark(*pos, player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_win(&board, Player::X), None);
        assert_eq!(check_win(&board, Player::O), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = mark_all(
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            Player::X,
        );
        let line = check_win(&board, Player::X).unwrap();
        assert_eq!(line.kind(), LineType::Horizontal);
        assert_eq!((line.start_row(), line.start_col()), (0, 0));
        assert_eq!((line.end_row(), line.end_col()), (0, 2));
    }

    #[test]
    fn test_only_mover_is_checked() {
        let board = mark_all(
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            Player::X,
        );
        assert_eq!(check_win(&board, Player::O), None);
    }

    #[test]
    fn test_winner_columns_and_diagonals() {
        let board = mark_all(
            &[Position::TopRight, Position::MiddleRight, Position::BottomRight],
            Player::O,
        );
        let line = check_win(&board, Player::O).unwrap();
        assert_eq!(line.kind(), LineType::Vertical);
        assert_eq!((line.start_row(), line.start_col()), (0, 2));
        assert_eq!((line.end_row(), line.end_col()), (2, 2));

        let board = mark_all(
            &[Position::TopLeft, Position::Center, Position::BottomRight],
            Player::O,
        );
        assert_eq!(check_win(&board, Player::O).unwrap().kind(), LineType::DiagonalTopLeft);

        let board = mark_all(
            &[Position::TopRight, Position::Center, Position::BottomLeft],
            Player::X,
        );
        assert_eq!(check_win(&board, Player::X).unwrap().kind(), LineType::DiagonalTopRight);
    }

    #[test]
    fn test_rows_reported_before_columns_and_diagonals() {
        // Top row, left column and main diagonal all complete.
        let board = mark_all(
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
                Position::Center,
                Position::BottomRight,
            ],
            Player::X,
        );
        let line = check_win(&board, Player::X).unwrap();
        assert_eq!(line.kind(), LineType::Horizontal);
        assert_eq!(line.start_row(), 0);
    }

    #[test]
    fn test_columns_reported_before_diagonals() {
        let board = mark_all(
            &[
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft,
                Position::Center,
                Position::BottomRight,
            ],
            Player::O,
        );
        let line = check_win(&board, Player::O).unwrap();
        assert_eq!(line.kind(), LineType::Vertical);
        assert_eq!(line.start_col(), 0);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = mark_all(&[Position::TopLeft, Position::TopCenter], Player::X);
        assert_eq!(check_win(&board, Player::X), None);
    }
}
