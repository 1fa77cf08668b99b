//! Terminal front end for the tic-tac-toe engine.
//!
//! Reads commands line by line, forwards them to a
//! [`strictly_tictactoe::GameEngine`], and prints the resulting state.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod render;
mod session;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use input::{HELP, Input, InputError, parse_coords};
pub use render::{render_score, render_state, round_over_hint};
pub use session::{run_play, run_replay, schema_json, to_json};
