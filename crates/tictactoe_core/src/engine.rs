//! Game engine: turn order, move application and the computer opponent.

use super::board::Board;
use super::error::{GameError, MoveError};
use super::position::Position;
use super::search::{Minimax, Scoring, SearchResult};
use super::types::{GameOutcome, Mark, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who plays which mark, who opens, and how the search scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Mark played by the human; the computer plays the other one.
    pub human: Player,
    /// Mark that moves first after every reset.
    pub first: Player,
    /// Scoring rule for the minimax search.
    pub scoring: Scoring,
}

impl EngineConfig {
    /// Mark played by the computer.
    pub fn computer(&self) -> Player {
        self.human.opponent()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            human: Player::X,
            first: Player::X,
            scoring: Scoring::Outcome,
        }
    }
}

/// Tic-tac-toe game engine.
///
/// Owns the board and the turn. The presentation layer reports human
/// moves through [`GameEngine::apply_human_move`] and asks for the reply
/// with [`GameEngine::computer_move`]; it never writes to the board.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    turn: Player,
    outcome: GameOutcome,
    config: EngineConfig,
    search: Minimax,
    last_computer_move: Option<SearchResult>,
}

impl GameEngine {
    /// Creates a new game.
    #[instrument]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            turn: config.first,
            outcome: GameOutcome::InProgress,
            config,
            search: Minimax::new(config.computer(), config.scoring),
            last_computer_move: None,
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark played by the human.
    pub fn human(&self) -> Player {
        self.config.human
    }

    /// Mark played by the computer.
    pub fn computer(&self) -> Player {
        self.config.computer()
    }

    /// Returns the player to move.
    pub fn current_turn(&self) -> Player {
        self.turn
    }

    /// Returns the game outcome so far.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns true if it is the computer's turn in an unfinished game.
    pub fn computer_to_move(&self) -> bool {
        self.outcome == GameOutcome::InProgress && self.turn == self.computer()
    }

    /// The most recent search result behind a computer move, if any.
    pub fn last_computer_move(&self) -> Option<SearchResult> {
        self.last_computer_move
    }

    /// Gets the mark at grid coordinates, for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] outside the 3x3 grid.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Mark, GameError> {
        self.board.cell_at(row, col)
    }

    /// Places the human's mark at `(row, col)`.
    ///
    /// On success the turn passes to the computer unless the move
    /// finished the game. The engine does not move for the computer;
    /// call [`GameEngine::computer_move`] next.
    ///
    /// # Errors
    ///
    /// - [`GameError::IndexOutOfRange`] for coordinates outside the grid.
    /// - [`MoveError::GameOver`] if the game already ended.
    /// - [`MoveError::WrongTurn`] if it is the computer's turn.
    /// - [`MoveError::SquareOccupied`] if the cell is taken.
    ///
    /// Nothing changes when an error is returned.
    #[instrument(skip(self), fields(human = %self.config.human))]
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<GameOutcome, GameError> {
        let pos = Position::new(row, col)?;
        let human = self.human();
        self.check_can_move(human).inspect_err(|err| {
            debug!(%err, position = %pos, "Rejected human move");
        })?;

        self.board.place(pos, human).inspect_err(|err| {
            debug!(%err, "Rejected human move");
        })?;
        debug!(position = %pos, "Human moved");

        Ok(self.finish_move(human))
    }

    /// Chooses and plays the computer's move with a full minimax search.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already ended.
    /// - [`MoveError::BoardFull`] if there is no empty cell.
    /// - [`MoveError::WrongTurn`] if it is the human's turn.
    #[instrument(skip(self), fields(computer = %self.computer()))]
    pub fn computer_move(&mut self) -> Result<GameOutcome, GameError> {
        let computer = self.computer();
        self.check_can_move(computer)?;
        if self.board.is_full() {
            return Err(MoveError::BoardFull.into());
        }

        let result = self.search.search(&mut self.board, computer)?;
        let pos = result.position.ok_or(MoveError::BoardFull)?;
        self.board.place(pos, computer)?;
        self.last_computer_move = Some(result);
        debug!(
            position = %pos,
            score = result.score,
            nodes = self.search.nodes(),
            "Computer moved"
        );

        Ok(self.finish_move(computer))
    }

    /// Clears the board and starts a new game with the configured first mover.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = self.config.first;
        self.outcome = GameOutcome::InProgress;
        self.last_computer_move = None;
        info!(first = %self.turn, "Game reset");
    }

    fn check_can_move(&self, player: Player) -> Result<(), MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.turn != player {
            return Err(MoveError::WrongTurn(player));
        }
        Ok(())
    }

    /// Updates the outcome after `player` moved and passes the turn on
    /// if the game continues.
    fn finish_move(&mut self, player: Player) -> GameOutcome {
        self.outcome = self.board.outcome();

        match self.outcome {
            GameOutcome::InProgress => self.turn = player.opponent(),
            outcome => info!(?outcome, "Game over"),
        }
        self.outcome
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
