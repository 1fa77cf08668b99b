//! strictly_games - terminal tic-tac-toe

use anyhow::Result;
use clap::Parser;
use std::io;
use strictly_games::{AppConfig, Cli, Command, run_play, run_replay, schema_json, to_json};
use strictly_tictactoe::GameEngine;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    // The log filter comes from config, so loading happens before any
    // subscriber exists; its outcome is logged once tracing is up.
    let config = AppConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    debug!(path = ?cli.config, ?config, "Configuration resolved");

    match cli.command {
        Command::Play => {
            info!("Starting interactive game");
            let mut engine = GameEngine::new();
            run_play(&mut engine, &config, io::stdin().lock(), io::stdout().lock())
        }
        Command::Replay { moves } => {
            let state = run_replay(&moves)?;
            println!("{}", to_json(&state, &config)?);
            Ok(())
        }
        Command::Schema => {
            println!("{}", schema_json(&config)?);
            Ok(())
        }
    }
}
