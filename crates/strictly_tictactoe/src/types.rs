//! Core domain types for tic-tac-toe.

use crate::action::Move;
use crate::line::WinningLine;
use crate::position::Position;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    derive_more::Display,
)]
pub enum Player {
    /// Player X (moves first every round).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by X.
    X,
    /// Marked by O.
    O,
}

impl Cell {
    /// The player whose mark is in this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Returns true if no mark has been placed.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// 3x3 tic-tac-toe board, row-major.
///
/// Boards are plain values. Placing a mark produces a new board and leaves
/// the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Gets the cell at raw coordinates, or `None` when out of range.
    pub fn get_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Board {
        let mut next = *self;
        next.cells[pos.row()][pos.col()] = Cell::from(player);
        next
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }

    /// All rows of the board.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        let mark = Cell::from(player);
        self.cells.iter().flatten().filter(|c| **c == mark).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// With `hints`, empty cells show their 1-based cell number.
    pub fn display(&self, hints: bool) -> String {
        let mut result = String::new();
        for pos in Position::ALL {
            let symbol = match self.get(pos) {
                Cell::Empty if hints => (pos.to_index() + 1).to_string(),
                Cell::Empty => " ".to_string(),
                Cell::X => "X".to_string(),
                Cell::O => "O".to_string(),
            };
            result.push_str(&symbol);
            match (pos.row(), pos.col()) {
                (2, 2) => {}
                (_, 2) => result.push_str("\n-+-+-\n"),
                _ => result.push('|'),
            }
        }
        result
    }
}

/// Disambiguated round status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// The player completed a line.
    Won(Player),
    /// The board filled with no line.
    Drawn,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}

/// Immutable snapshot of the engine.
///
/// `winner` is `None` both while the round is running and after a draw;
/// only `game_over` tells the two apart. Use [`GameState::status`] for the
/// combined view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) game_over: bool,
    pub(crate) winner: Option<Player>,
    pub(crate) winning_line: Option<WinningLine>,
    pub(crate) score_x: u32,
    pub(crate) score_o: u32,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates the initial state: empty board, X to move, scores 0/0.
    pub fn new() -> Self {
        Self::with_scores(0, 0)
    }

    /// A fresh round carrying the given scores.
    pub(crate) fn with_scores(score_x: u32, score_o: u32) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            game_over: false,
            winner: None,
            winning_line: None,
            score_x,
            score_o,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move. After the round ends this is left at its last value.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns true once the round was won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Winner of the round, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The completed line, present only after a win.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Rounds won by X since the last score reset.
    pub fn score_x(&self) -> u32 {
        self.score_x
    }

    /// Rounds won by O since the last score reset.
    pub fn score_o(&self) -> u32 {
        self.score_o
    }

    /// Rounds won by `player` since the last score reset.
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::X => self.score_x,
            Player::O => self.score_o,
        }
    }

    /// Moves accepted this round, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Combined view of `game_over` and `winner`.
    pub fn status(&self) -> GameStatus {
        match (self.game_over, self.winner) {
            (false, _) => GameStatus::InProgress,
            (true, Some(player)) => GameStatus::Won(player),
            (true, None) => GameStatus::Drawn,
        }
    }

    /// Empty cells in row-major order. Empty once the round is over.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.game_over {
            return Vec::new();
        }
        Position::ALL
            .into_iter()
            .filter(|pos| self.board.is_empty(*pos))
            .collect()
    }

    /// One-line status for a turn indicator.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::InProgress => format!("Player {}'s turn", self.current_player),
            GameStatus::Won(player) => format!("Player {} wins!", player),
            GameStatus::Drawn => "It's a draw!".to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
