//! Command-line interface for tictactoe_minimax.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_core::{Player, Scoring};

/// Tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe_minimax")]
#[command(about = "Play tic-tac-toe against an optimal minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Mark played by the human
    #[arg(long, global = true)]
    pub human: Option<MarkArg>,

    /// Mark that moves first
    #[arg(long, global = true)]
    pub first: Option<MarkArg>,

    /// How the computer scores finished games
    #[arg(long, global = true)]
    pub scoring: Option<ScoringArg>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to play)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer in the terminal
    Play,

    /// Let two optimal players play each other
    SelfPlay,

    /// Show the best move for a board
    Analyze {
        /// Nine cells in row-major order using X, O and `.`, e.g. "XO./.X./..O"
        board: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Player mark as typed on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MarkArg {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<MarkArg> for Player {
    fn from(mark: MarkArg) -> Self {
        match mark {
            MarkArg::X => Player::X,
            MarkArg::O => Player::O,
        }
    }
}

/// Scoring rule as typed on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScoringArg {
    /// Win, loss or draw only
    Outcome,
    /// Prefer faster wins and slower losses
    Depth,
}

impl From<ScoringArg> for Scoring {
    fn from(scoring: ScoringArg) -> Self {
        match scoring {
            ScoringArg::Outcome => Scoring::Outcome,
            ScoringArg::Depth => Scoring::DepthBiased,
        }
    }
}
