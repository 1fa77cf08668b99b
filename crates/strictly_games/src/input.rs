//! Parsing of player input lines.

use derive_more::{Display, Error};
use strictly_tictactoe::Position;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Raw zero-based coordinates, checked by the engine.
    Coords {
        /// Row.
        row: usize,
        /// Column.
        col: usize,
    },
    /// A cell chosen by number or label.
    Cell(Position),
    /// Start a new round.
    Reset,
    /// Zero the scores and start a new round.
    ResetScore,
    /// Print the state as JSON.
    State,
    /// Print the command summary.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input: {:?}", input)]
pub struct InputError {
    /// The offending text.
    pub input: String,
}

/// Help text listing the accepted commands.
pub const HELP: &str = "\
Commands:
  <row> <col>    place a mark (zero-based, e.g. `1 1` or `1,1`)
  <1-9>          place a mark by cell number
  <label>        place a mark by name (e.g. `center`, `top-left`)
  reset          start a new round
  reset-score    zero the scores and start a new round
  state          print the game state as JSON
  help           show this text
  quit           leave";

impl std::str::FromStr for Input {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "reset" | "new" => return Ok(Input::Reset),
            "reset-score" | "reset score" => return Ok(Input::ResetScore),
            "state" => return Ok(Input::State),
            "help" | "?" => return Ok(Input::Help),
            "quit" | "exit" | "q" => return Ok(Input::Quit),
            _ => {}
        }

        if let Some((row, col)) = parse_coords(trimmed) {
            return Ok(Input::Coords { row, col });
        }

        Position::from_label_or_number(trimmed)
            .map(Input::Cell)
            .ok_or_else(|| InputError {
                input: trimmed.to_string(),
            })
    }
}

/// Parses `row,col` or `row col` into two numbers.
pub fn parse_coords(s: &str) -> Option<(usize, usize)> {
    let mut parts = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        assert_eq!("1 2".parse::<Input>(), Ok(Input::Coords { row: 1, col: 2 }));
        assert_eq!(" 0,0 ".parse::<Input>(), Ok(Input::Coords { row: 0, col: 0 }));
        assert_eq!("5, 7".parse::<Input>(), Ok(Input::Coords { row: 5, col: 7 }));
        assert_eq!(parse_coords("1 2 3"), None);
        assert_eq!(parse_coords("1"), None);
    }

    #[test]
    fn test_parse_cells_and_commands() {
        assert_eq!("5".parse::<Input>(), Ok(Input::Cell(Position::Center)));
        assert_eq!("Top-Left".parse::<Input>(), Ok(Input::Cell(Position::TopLeft)));
        assert_eq!("RESET".parse::<Input>(), Ok(Input::Reset));
        assert_eq!("reset-score".parse::<Input>(), Ok(Input::ResetScore));
        assert_eq!("q".parse::<Input>(), Ok(Input::Quit));
    }

    #[test]
    fn test_garbage_rejected() {
        let err = "banana".parse::<Input>().unwrap_err();
        assert_eq!(err.input, "banana");
        assert!("0".parse::<Input>().is_err());
    }
}
