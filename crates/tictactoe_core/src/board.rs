//! The 3x3 grid of marks.

use super::error::{GameError, MoveError};
use super::position::{Position, SIZE};
use super::rules;
use super::types::{GameOutcome, Mark, Player};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 3x3 tic-tac-toe board.
///
/// A cell written with a player's mark stays that way until
/// [`Board::clear`] or [`Board::reset`]; [`Board::place`] never
/// overwrites an occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Mark; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; 9],
        }
    }

    /// Gets the mark at the given position.
    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Gets the mark at grid coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] outside the 3x3 grid.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Mark, GameError> {
        Position::new(row, col).map(|pos| self.get(pos))
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Writes the player's mark into an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the cell already holds a mark.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.cells[pos.to_index()] = player.into();
        Ok(())
    }

    /// Resets a single cell to empty, undoing a [`Board::place`].
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.to_index()] = Mark::Empty;
    }

    /// Sets every cell back to empty.
    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; 9];
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the player owning a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Win, draw or still in progress, judged from the marks alone.
    pub fn outcome(&self) -> GameOutcome {
        match self.winner() {
            Some(winner) => GameOutcome::Won(winner),
            None if self.is_full() => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        }
    }

    /// Returns all cells as a slice.
    pub fn squares(&self) -> &[Mark; 9] {
        &self.cells
    }

    /// Number of cells holding the player's mark.
    pub fn count(&self, player: Player) -> usize {
        let mark = Mark::from(player);
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_empty(pos))
    }
}

/// Renders the board with empty cells shown as their 1-9 cell number.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let index = row * SIZE + col;
                match self.cells[index] {
                    Mark::Empty => write!(f, "{}", index + 1)?,
                    Mark::X => write!(f, "X")?,
                    Mark::O => write!(f, "O")?,
                }
                if col < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Failure to read a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// A character that is neither a mark nor an empty-cell marker.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidCell(char),

    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for ParseBoardError {}

/// Reads nine cells in row-major order.
///
/// `X`/`x` and `O`/`o` are marks; `.`, `-` and `_` are empty cells.
/// Whitespace, `|` and `/` are ignored so `"XO./.X./..O"` works.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            let mark = match c {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '.' | '-' | '_' => Mark::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(ParseBoardError::InvalidCell(c)),
            };
            cells.push(mark);
        }
        let cells: [Mark; 9] = cells
            .try_into()
            .map_err(|cells: Vec<Mark>| ParseBoardError::WrongLength(cells.len()))?;
        Ok(Self { cells })
    }
}
