//! Error types for board and engine operations.

use super::position::Position;
use super::types::Player;

/// A move that the rules do not allow.
///
/// Always recoverable: the caller rejects the input and the engine
/// state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Player),

    /// No empty square is left to play.
    #[display("Board is full")]
    BoardFull,
}

impl std::error::Error for MoveError {}

/// Error returned by [`GameEngine`](crate::GameEngine) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The move breaks the rules of the game.
    #[display("Illegal move: {}", _0)]
    IllegalMove(MoveError),

    /// Coordinates outside the 3x3 grid.
    #[display("Coordinates ({}, {}) are outside the board", row, col)]
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::IllegalMove(err)
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalMove(err) => Some(err),
            GameError::IndexOutOfRange { .. } => None,
        }
    }
}

impl GameError {
    /// Returns true for rule violations the caller can simply ignore.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, GameError::IllegalMove(_))
    }
}
