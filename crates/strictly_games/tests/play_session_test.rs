//! Tests for the interactive and replay front ends.

use std::io::Cursor;
use strictly_games::{AppConfig, run_play, run_replay, schema_json, to_json};
use strictly_tictactoe::{GameEngine, GameStatus, LineType, Player};

fn play_script(engine: &mut GameEngine, script: &str) -> String {
    let mut out = Vec::new();
    run_play(engine, &AppConfig::default(), Cursor::new(script), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_play_win_then_new_round() {
    let mut engine = GameEngine::new();
    let output = play_script(&mut engine, "0 0\n1,0\ntop-center\n5\n3\nreset\nquit\n");

    assert!(output.contains("Player X wins!"));
    assert!(output.contains("Round over."));
    assert!(output.contains("Score  X: 1  O: 0"));

    let state = engine.state();
    assert_eq!(state.status(), GameStatus::InProgress);
    assert_eq!(state.score_x(), 1);
    assert!(state.history().is_empty());
}

#[test]
fn test_play_reports_rejections() {
    let mut engine = GameEngine::new();
    let output = play_script(&mut engine, "center\n1 1\n5\n3 3\nwat\n");

    assert!(output.contains("Center is already occupied"));
    assert!(output.contains("Coordinates (3, 3) are outside the board"));
    assert!(output.contains("Unrecognized input: \"wat\""));
    assert_eq!(engine.state().history().len(), 1);
    assert_eq!(engine.state().current_player(), Player::O);
}

#[test]
fn test_play_rejects_moves_after_round_ends() {
    let mut engine = GameEngine::new();
    let output = play_script(&mut engine, "1\n4\n2\n5\n3\n9\n");

    assert!(output.contains("Game is already over"));
    assert_eq!(engine.state().history().len(), 5);
}

#[test]
fn test_play_reset_score_and_state_dump() {
    let mut engine = GameEngine::new();
    let output = play_script(&mut engine, "1\n4\n2\n5\n3\nreset-score\nstate\n");

    assert!(output.contains("\"score_x\": 0"));
    assert_eq!(engine.state().score_x(), 0);
}

#[test]
fn test_replay_reaches_final_state() {
    let moves: Vec<String> = ["0,1", "0,0", "1,1", "1,0", "0,2", "2,0"]
        .into_iter()
        .map(String::from)
        .collect();
    let state = run_replay(&moves).unwrap();

    assert_eq!(state.winner(), Some(Player::O));
    assert_eq!(state.winning_line().map(|l| l.kind()), Some(LineType::Vertical));
    assert_eq!(state.score_o(), 1);

    let json = to_json(&state, &AppConfig::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["winner"], "O");
}

#[test]
fn test_replay_fails_on_bad_moves() {
    let occupied = run_replay(&["1,1".to_string(), "1,1".to_string()]).unwrap_err();
    assert!(occupied.to_string().contains("Move 2"));

    let out_of_range = run_replay(&["4,0".to_string()]).unwrap_err();
    assert!(out_of_range.to_string().contains("outside the board"));

    let garbage = run_replay(&["x".to_string()]).unwrap_err();
    assert!(garbage.to_string().contains("row,col"));
}

#[test]
fn test_schema_describes_game_state() {
    let json = schema_json(&AppConfig::default()).unwrap();
    let schema: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(schema["title"], "GameState");
    let properties = schema["properties"].as_object().unwrap();
    for field in ["board", "current_player", "game_over", "winner", "score_x", "score_o"] {
        assert!(properties.contains_key(field), "schema is missing {field}");
    }
}
