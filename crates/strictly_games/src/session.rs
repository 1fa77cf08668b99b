//! Interactive play and batch replay over a [`GameEngine`].

use crate::config::AppConfig;
use crate::input::{HELP, Input, parse_coords};
use crate::render::{render_state, round_over_hint};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use strictly_tictactoe::{GameEngine, GameState, MoveError, Position};
use tracing::{debug, info, instrument, warn};

/// Runs the interactive loop until `quit` or end of input.
#[instrument(skip_all)]
pub fn run_play<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    config: &AppConfig,
    input: R,
    mut out: W,
) -> Result<()> {
    let hints = *config.show_hints();
    writeln!(out, "{}\n", render_state(engine.state(), hints))?;
    writeln!(out, "Type `help` for commands.")?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Input>() {
            Ok(command) => command,
            Err(e) => {
                debug!(%e, "Bad input");
                writeln!(out, "{}. Type `help` for commands.", e)?;
                continue;
            }
        };

        match command {
            Input::Quit => break,
            Input::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Input::State => {
                writeln!(out, "{}", to_json(engine.state(), config)?)?;
                continue;
            }
            Input::Reset => engine.reset_round(),
            Input::ResetScore => engine.reset_score(),
            Input::Coords { row, col } => match engine.make_move(row, col) {
                Ok(true) => {}
                Ok(false) => {
                    writeln!(out, "{}", rejection_reason(engine.state(), row, col))?;
                    continue;
                }
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    continue;
                }
            },
            Input::Cell(position) => {
                if let Err(e) = engine.try_move(position) {
                    writeln!(out, "{}", e)?;
                    continue;
                }
            }
        }

        writeln!(out, "\n{}\n", render_state(engine.state(), hints))?;
        if let Some(hint) = round_over_hint(engine.state()) {
            writeln!(out, "{}", hint)?;
        }
    }

    info!(
        score_x = engine.state().score_x(),
        score_o = engine.state().score_o(),
        "Session ended"
    );
    out.flush()?;
    Ok(())
}

/// Explains why a `make_move` call at in-range coordinates was rejected.
fn rejection_reason(state: &GameState, row: usize, col: usize) -> String {
    if state.is_game_over() {
        MoveError::GameOver.to_string()
    } else {
        match Position::from_row_col(row, col) {
            Some(pos) => MoveError::CellOccupied(pos).to_string(),
            None => MoveError::OutOfBounds { row, col }.to_string(),
        }
    }
}

/// Plays `moves` (each `row,col`) on a fresh engine and returns the final state.
///
/// # Errors
///
/// Fails on unparsable, out-of-range or rejected moves, naming the move.
#[instrument(skip_all, fields(count = moves.len()))]
pub fn run_replay(moves: &[String]) -> Result<GameState> {
    let mut engine = GameEngine::new();

    for (i, text) in moves.iter().enumerate() {
        let Some((row, col)) = parse_coords(text) else {
            bail!("Move {} ({:?}) is not of the form row,col", i + 1, text);
        };
        let position = Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col });
        let outcome = position.and_then(|pos| engine.try_move(pos));
        if let Err(e) = outcome {
            warn!(move_number = i + 1, %e, "Replay stopped");
            bail!("Move {} ({}) failed: {}", i + 1, text, e);
        }
    }

    Ok(engine.state().clone())
}

/// JSON Schema of [`GameState`], formatted as configured.
pub fn schema_json(config: &AppConfig) -> Result<String> {
    let schema = schemars::schema_for!(GameState);
    let json = if *config.pretty_json() {
        serde_json::to_string_pretty(&schema)
    } else {
        serde_json::to_string(&schema)
    };
    json.context("Failed to serialize game state schema")
}

/// Serializes a state as configured.
pub fn to_json(state: &GameState, config: &AppConfig) -> Result<String> {
    let json = if *config.pretty_json() {
        serde_json::to_string_pretty(state)
    } else {
        serde_json::to_string(state)
    };
    json.context("Failed to serialize game state")
}
