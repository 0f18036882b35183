//! Pure tic-tac-toe game logic with an optimal computer opponent.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid of [`Mark`]s with win and draw detection
//! - **GameEngine**: turn order, move validation and the computer's moves
//! - **Minimax**: exhaustive game-tree search used by the engine
//!
//! The crate performs no I/O. A front end reports human moves as
//! `(row, col)` coordinates and renders the [`GameOutcome`] it gets back.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, GameOutcome};
//!
//! let mut engine = GameEngine::default();
//! assert_eq!(engine.apply_human_move(1, 1)?, GameOutcome::InProgress);
//! assert_eq!(engine.computer_move()?, GameOutcome::InProgress);
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod position;
pub mod rules;
mod search;
mod types;

pub use board::{Board, ParseBoardError};
pub use engine::{EngineConfig, GameEngine};
pub use error::{GameError, MoveError};
pub use position::{Position, SIZE};
pub use search::{DEPTH_BASE, Minimax, Scoring, SearchResult};
pub use types::{GameOutcome, Mark, Player};
