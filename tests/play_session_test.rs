//! Tests for the interactive play loop driven by scripted input.

use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};
use tictactoe_core::{EngineConfig, GameOutcome, Mark, Player, Scoring};
use tictactoe_minimax::PlaySession;
use tracing::Level;

fn play(config: EngineConfig, script: &str) -> (String, GameOutcome, Vec<Mark>) {
    let mut output = Vec::new();
    let mut session = PlaySession::new(config, Cursor::new(script.to_string()), &mut output);
    session.run().expect("session runs");
    let outcome = session.engine().outcome();
    let cells = session.engine().board().squares().to_vec();
    drop(session);
    (String::from_utf8(output).unwrap(), outcome, cells)
}

#[test]
fn test_computer_answers_each_move() {
    let (output, outcome, cells) = play(EngineConfig::default(), "1\n");
    assert_eq!(outcome, GameOutcome::InProgress);
    assert_eq!(cells[0], Mark::X);
    assert_eq!(cells[4], Mark::O);
    assert!(output.contains("Computer plays Center."));
    assert!(output.contains("Player X's turn"));
}

#[test]
fn test_top_row_attempt_is_blocked() {
    let (output, outcome, cells) = play(EngineConfig::default(), "1 1\n1 2\n1 3\nquit\n");
    assert_eq!(cells[2], Mark::O);
    assert!(output.contains("Computer plays Top-right."));
    assert!(output.contains("Square Top-right is already occupied"));
    assert_ne!(outcome, GameOutcome::Won(Player::X));
}

#[test]
fn test_bad_input_keeps_game_going() {
    let (output, outcome, cells) = play(EngineConfig::default(), "hello\n4 1\n\nhelp\n");
    assert_eq!(outcome, GameOutcome::InProgress);
    assert!(cells.iter().all(|mark| *mark == Mark::Empty));
    assert!(output.contains("Unrecognized input"));
    assert!(output.contains("outside the board"));
    assert!(output.contains("Please enter a move"));
    assert!(output.contains("reset (r)"));
}

#[test]
fn test_computer_win_is_announced() {
    // Taking the first free cell every time loses to the computer.
    let (output, outcome, _) = play(EngineConfig::default(), "1\n2\n4\n");
    assert_eq!(outcome, GameOutcome::Won(Player::O));
    assert!(output.contains("Player O wins! Type reset to play again or quit to exit."));
}

#[test]
fn test_reset_starts_over() {
    let (output, outcome, cells) = play(EngineConfig::default(), "1\n2\n4\nreset\n");
    assert_eq!(outcome, GameOutcome::InProgress);
    assert!(cells.iter().all(|mark| *mark == Mark::Empty));
    assert!(output.contains("New game."));
}

#[test]
fn test_computer_opens_when_human_is_second() {
    let config = EngineConfig {
        human: Player::O,
        first: Player::X,
        scoring: Scoring::DepthBiased,
    };
    let (output, _, cells) = play(config, "q\n");
    assert!(output.starts_with("You are O, the computer is X."));
    assert_eq!(cells[0], Mark::X);
    assert!(output.contains("Player O's turn"));
}

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_rejected_moves_stay_below_warn() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    // Occupied cell, then a cell off the board.
    let (output, _, _) = tracing::subscriber::with_default(subscriber, || {
        play(EngineConfig::default(), "5\n5\n4 1\nq\n")
    });
    assert!(output.contains("Square Center is already occupied"));
    assert!(output.contains("outside the board"));

    let logged = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(logged.is_empty(), "unexpected warnings: {logged}");
}
