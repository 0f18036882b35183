//! Tic-tac-toe minimax - terminal front end
//!
//! Plays against a human, against itself, or analyzes a single board.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictactoe_minimax::{AppConfig, PlaySession, analyze, outcome_message, self_play};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = AppConfig::load_or_default(&cli.config)?.with_overrides(
        cli.human.map(Into::into),
        cli.first.map(Into::into),
        cli.scoring.map(Into::into),
    );
    info!(?config, "Configuration resolved");

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::SelfPlay => run_self_play(&config),
        Command::Analyze { board, json } => run_analyze(&config, &board, json),
    }
}

/// Logs go to stderr (or a file) so they never mix with the board on stdout.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all)]
fn run_play(config: &AppConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let mut session = PlaySession::new(config.engine_config(), stdin.lock(), std::io::stdout());
    session.run()
}

/// Run a game between two optimal players
#[instrument(skip_all)]
fn run_self_play(config: &AppConfig) -> Result<()> {
    let (board, outcome) = self_play(config.engine_config())?;
    println!("{}\n", board);
    if let Some(message) = outcome_message(outcome) {
        println!("{}", message);
    }
    Ok(())
}

/// Print the best move for a board
#[instrument(skip(config))]
fn run_analyze(config: &AppConfig, board: &str, json: bool) -> Result<()> {
    let analysis = analyze(board, config.engine_config())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("{}\n", analysis.board);
    if let Some(message) = outcome_message(analysis.outcome) {
        println!("{}", message);
        return Ok(());
    }
    println!("{} to move", analysis.to_move);
    for scored in &analysis.moves {
        println!(
            "  {:<13} (row {}, col {})  score {:>3}",
            scored.position.label(),
            scored.row + 1,
            scored.col + 1,
            scored.score
        );
    }
    if let Some(pos) = analysis.best.position {
        println!("Best move: {} (score {})", pos, analysis.best.score);
    }
    info!(nodes = analysis.nodes, "Analysis finished");
    Ok(())
}
