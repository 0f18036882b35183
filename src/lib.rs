//! Terminal tic-tac-toe against an optimal computer opponent.
//!
//! This crate is the presentation layer around [`tictactoe_core`]: it
//! reads moves from a terminal, asks the engine for the computer's
//! replies and prints the board and the result.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for who plays which mark and who opens
//! - **Input**: parsing of typed moves and boards
//! - **App**: the interactive loop, self-play and single-board analysis
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe_minimax::{AppConfig, PlaySession};
//!
//! let input = Cursor::new("center\nquit\n");
//! let mut output = Vec::new();
//! let mut session = PlaySession::new(AppConfig::default().engine_config(), input, &mut output);
//! session.run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
mod input;

pub use app::{Analysis, PlaySession, ScoredMove, analyze, outcome_message, self_play, turn_message};
pub use config::{AppConfig, ConfigError};
pub use input::{BoardInputError, Command, HELP, InputError, parse_board, parse_command};
