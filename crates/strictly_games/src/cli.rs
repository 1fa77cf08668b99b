//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Two-player tic-tac-toe with running scores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_games.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading one command per line from stdin
    Play,

    /// Apply moves to a fresh game and print the final state as JSON
    Replay {
        /// Moves as `row,col`, zero-based (e.g. `0,0 1,1 2,2`)
        #[arg(required = true)]
        moves: Vec<String>,
    },

    /// Print the JSON Schema of the game state
    Schema,
}
