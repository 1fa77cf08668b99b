//! The game engine: sole owner of the current [`GameState`].
//!
//! Every accepted transition builds a new state and swaps it in whole.
//! Snapshots handed out earlier are never mutated.

use crate::action::{Move, MoveError, MoveOutcome};
use crate::contracts::{Contract, MoveContract};
use crate::position::Position;
use crate::rules::check_win;
use crate::types::{GameState, Player};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine with running scores across rounds.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: Arc<GameState>,
}

impl GameEngine {
    /// Creates an engine at the initial state.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: Arc::new(GameState::new()),
        }
    }

    /// Builds an engine by playing `moves` in order from the initial state.
    ///
    /// # Errors
    ///
    /// Returns the first move's error, rejections included.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for pos in moves {
            engine.try_move(*pos)?;
        }
        Ok(engine)
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns a shared handle to the current state.
    ///
    /// The handle keeps showing this state after later transitions.
    pub fn snapshot(&self) -> Arc<GameState> {
        Arc::clone(&self.state)
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Returns `Ok(true)` when the move was accepted (whether or not it ended
    /// the round) and `Ok(false)` when it was rejected because the round is
    /// over or the cell is taken. A rejected move changes nothing.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] if either coordinate is outside `0..3`.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<bool, MoveError> {
        let position =
            Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;

        match self.try_move(position) {
            Ok(_) => Ok(true),
            Err(e) if e.is_rejection() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Places the current player's mark at `position`, reporting the outcome.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the round already ended
    /// - [`MoveError::CellOccupied`] if the cell is marked
    /// - [`MoveError::InvariantViolation`] if the resulting state is
    ///   inconsistent; the state is left unchanged
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn try_move(&mut self, position: Position) -> Result<MoveOutcome, MoveError> {
        let before: &GameState = &self.state;

        if let Err(e) = MoveContract::pre(before, &position) {
            debug!(%position, reason = %e, "Move rejected");
            return Err(e);
        }

        let (next, outcome) = advance(before, position);
        MoveContract::post(before, &next)?;

        match outcome {
            MoveOutcome::Continue { next: to_move } => {
                let accepted = Move::new(before.current_player(), position);
                debug!(%accepted, next = %to_move, "Move accepted");
            }
            MoveOutcome::Won { winner, line } => {
                info!(
                    %winner,
                    line = ?line.kind(),
                    score_x = next.score_x(),
                    score_o = next.score_o(),
                    "Round won"
                );
            }
            MoveOutcome::Drawn => {
                info!(score_x = next.score_x(), score_o = next.score_o(), "Round drawn");
            }
        }

        self.state = Arc::new(next);
        Ok(outcome)
    }

    /// Starts a new round, keeping scores.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        let (score_x, score_o) = (self.state.score_x(), self.state.score_o());
        debug!(score_x, score_o, "Starting new round");
        self.state = Arc::new(GameState::with_scores(score_x, score_o));
    }

    /// Zeroes both scores and starts a new round.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) {
        debug!("Resetting scores");
        self.state = Arc::new(GameState::with_scores(0, 0));
        self.reset_round();
    }
}

/// Computes the state after `position` is marked by the current player.
///
/// Preconditions must already hold.
fn advance(before: &GameState, position: Position) -> (GameState, MoveOutcome) {
    let mover = before.current_player();
    let board = before.board().with_mark(position, mover);

    let mut history = before.history().to_vec();
    history.push(Move::new(mover, position));

    let mut next = GameState {
        board,
        current_player: mover,
        game_over: false,
        winner: None,
        winning_line: None,
        score_x: before.score_x(),
        score_o: before.score_o(),
        history,
    };

    let outcome = if let Some(line) = check_win(&board, mover) {
        next.game_over = true;
        next.winner = Some(mover);
        next.winning_line = Some(line);
        match mover {
            Player::X => next.score_x = next.score_x.saturating_add(1),
            Player::O => next.score_o = next.score_o.saturating_add(1),
        }
        MoveOutcome::Won {
            winner: mover,
            line,
        }
    } else if board.is_full() {
        next.game_over = true;
        MoveOutcome::Drawn
    } else {
        next.current_player = mover.opponent();
        MoveOutcome::Continue {
            next: next.current_player,
        }
    };

    (next, outcome)
}
