//! Exhaustive minimax search.
//!
//! The search explores every continuation of the current board. Trial
//! moves are written into the caller's board through a `TrialMove`
//! guard that clears the cell again when it goes out of scope, so the
//! board is restored on every return path including errors.
//!
//! Scores are always from the computer's point of view: positive means
//! the computer wins, negative means the human wins, zero is a draw.
//! Moves are scanned in row-major order and a later move only replaces
//! the current best if it scores strictly better, so the first of several
//! equally good moves is kept.

use super::board::Board;
use super::error::MoveError;
use super::position::Position;
use super::types::Player;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument, trace};

/// Base for depth-biased scores; larger than the deepest possible game.
pub const DEPTH_BASE: i32 = 10;

/// How terminal positions are scored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Scoring {
    /// +1 for a computer win, -1 for a human win, 0 for a draw.
    #[default]
    #[display("outcome")]
    Outcome,
    /// Wins found sooner and losses found later score higher:
    /// `±(10 - depth)`, 0 for a draw.
    #[display("depth")]
    #[serde(rename = "depth")]
    DepthBiased,
}

impl Scoring {
    /// Score of a win reached `depth` plies below the search root.
    pub fn win(self, depth: u32) -> i32 {
        match self {
            Scoring::Outcome => 1,
            Scoring::DepthBiased => DEPTH_BASE - depth as i32,
        }
    }
}

/// Best achievable score and the move that reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Score from the computer's point of view.
    pub score: i32,
    /// Move to play; `None` when the board was already terminal.
    pub position: Option<Position>,
}

impl SearchResult {
    /// Row of the chosen move.
    pub fn row(&self) -> Option<usize> {
        self.position.map(Position::row)
    }

    /// Column of the chosen move.
    pub fn col(&self) -> Option<usize> {
        self.position.map(Position::col)
    }
}

/// A hypothetical move held on the board for the lifetime of the guard.
struct TrialMove<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> TrialMove<'a> {
    fn new(board: &'a mut Board, pos: Position, player: Player) -> Result<Self, MoveError> {
        board.place(pos, player)?;
        Ok(Self { board, pos })
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.clear(self.pos);
    }
}

/// Minimax searcher playing for one side.
#[derive(Debug, Clone)]
pub struct Minimax {
    computer: Player,
    scoring: Scoring,
    nodes: u64,
}

impl Minimax {
    /// Creates a searcher that maximizes for `computer`.
    pub fn new(computer: Player, scoring: Scoring) -> Self {
        Self {
            computer,
            scoring,
            nodes: 0,
        }
    }

    /// Positions visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Finds the best move for `to_move`, assuming optimal play from
    /// both sides.
    ///
    /// The computer maximizes and the human minimizes. The board is
    /// identical before and after the call.
    ///
    /// # Errors
    ///
    /// Propagates [`MoveError`] if a trial move cannot be placed, which
    /// only happens if the board changes under the search.
    #[instrument(skip(self, board), fields(computer = %self.computer, scoring = %self.scoring))]
    pub fn search(&mut self, board: &mut Board, to_move: Player) -> Result<SearchResult, MoveError> {
        self.nodes = 0;
        let result = self.search_at(board, to_move, 0)?;
        debug!(
            score = result.score,
            position = ?result.position,
            nodes = self.nodes,
            "Search complete"
        );
        Ok(result)
    }

    /// Scores every legal move for `to_move`, in row-major order.
    ///
    /// Each score is the value of playing that cell followed by optimal
    /// play from both sides, still from the computer's point of view.
    ///
    /// # Errors
    ///
    /// Same as [`Minimax::search`].
    #[instrument(skip(self, board), fields(computer = %self.computer))]
    pub fn scored_moves(
        &mut self,
        board: &mut Board,
        to_move: Player,
    ) -> Result<Vec<(Position, i32)>, MoveError> {
        self.nodes = 0;
        if self.terminal_score(board, 0).is_some() {
            return Ok(Vec::new());
        }

        let mut scores = Vec::with_capacity(9);
        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            let mut trial = TrialMove::new(board, pos, to_move)?;
            let reply = self.search_at(&mut trial, to_move.opponent(), 1)?;
            scores.push((pos, reply.score));
        }
        Ok(scores)
    }

    fn search_at(
        &mut self,
        board: &mut Board,
        to_move: Player,
        depth: u32,
    ) -> Result<SearchResult, MoveError> {
        self.nodes += 1;

        if let Some(score) = self.terminal_score(board, depth) {
            trace!(depth, score, "Terminal position");
            return Ok(SearchResult {
                score,
                position: None,
            });
        }

        let maximizing = to_move == self.computer;
        let mut best: Option<SearchResult> = None;

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }

            let score = {
                let mut trial = TrialMove::new(board, pos, to_move)?;
                self.search_at(&mut trial, to_move.opponent(), depth + 1)?.score
            };

            let improves = match best {
                None => true,
                Some(current) if maximizing => score > current.score,
                Some(current) => score < current.score,
            };
            if improves {
                best = Some(SearchResult {
                    score,
                    position: Some(pos),
                });
            }
        }

        // A non-terminal board always has an empty cell.
        best.ok_or(MoveError::BoardFull)
    }

    fn terminal_score(&self, board: &Board, depth: u32) -> Option<i32> {
        match board.winner() {
            Some(winner) if winner == self.computer => Some(self.scoring.win(depth)),
            Some(_) => Some(-self.scoring.win(depth)),
            None if board.is_full() => Some(0),
            None => None,
        }
    }
}
