//! Terminal front end: the event loop around the game engine.
//!
//! The engine never moves on its own. After every accepted human move
//! the loop asks it for the computer's reply before drawing the board.

use crate::input::{Command, HELP, parse_board, parse_command};
use anyhow::Result;
use serde::Serialize;
use std::io::{BufRead, Write};
use tictactoe_core::{
    Board, EngineConfig, GameEngine, GameOutcome, Minimax, Player, Position, SearchResult,
};
use tracing::{debug, info, instrument};

/// Text announcing a finished game, `None` while it is still going.
pub fn outcome_message(outcome: GameOutcome) -> Option<String> {
    match outcome {
        GameOutcome::InProgress => None,
        GameOutcome::Won(player) => Some(format!("Player {} wins!", player)),
        GameOutcome::Draw => Some("Draw!".to_string()),
    }
}

/// Prompt line for the player to move.
pub fn turn_message(player: Player) -> String {
    format!("Player {}'s turn", player)
}

/// Interactive game between a human at the terminal and the computer.
pub struct PlaySession<R, W> {
    engine: GameEngine,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PlaySession<R, W> {
    /// Creates a session reading moves from `input` and drawing to `output`.
    pub fn new(config: EngineConfig, input: R, output: W) -> Self {
        Self {
            engine: GameEngine::new(config),
            input,
            output,
        }
    }

    /// The engine behind this session.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Runs until the player quits or input ends.
    #[instrument(skip(self), fields(human = %self.engine.human()))]
    pub fn run(&mut self) -> Result<()> {
        info!("Starting interactive game");
        writeln!(
            self.output,
            "You are {}, the computer is {}. Type help for options.",
            self.engine.human(),
            self.engine.computer()
        )?;

        loop {
            self.play_computer_turn()?;
            self.draw()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                return Ok(());
            }

            match parse_command(&line) {
                Ok(Command::Quit) => return Ok(()),
                Ok(Command::Help) => writeln!(self.output, "{}", HELP)?,
                Ok(Command::Reset) => {
                    self.engine.reset();
                    writeln!(self.output, "New game.")?;
                }
                Ok(Command::Move { row, col }) => self.play_human_move(row, col)?,
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    fn play_human_move(&mut self, row: usize, col: usize) -> Result<()> {
        if let Err(err) = self.engine.apply_human_move(row, col) {
            if !err.is_illegal_move() {
                debug!(%err, "Move off the board");
            }
            writeln!(self.output, "{}", err)?;
        }
        Ok(())
    }

    fn play_computer_turn(&mut self) -> Result<()> {
        if !self.engine.computer_to_move() {
            return Ok(());
        }
        self.engine.computer_move()?;
        if let Some(pos) = self.engine.last_computer_move().and_then(|r| r.position) {
            writeln!(self.output, "Computer plays {}.", pos)?;
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}\n", self.engine.board())?;
        match outcome_message(self.engine.outcome()) {
            Some(message) => writeln!(
                self.output,
                "{} Type reset to play again or quit to exit.",
                message
            )?,
            None => writeln!(self.output, "{}", turn_message(self.engine.current_turn()))?,
        }
        self.output.flush()?;
        Ok(())
    }
}

/// Plays a whole game with both sides choosing minimax-optimal moves.
///
/// The engine plays the computer side and a second searcher plays the
/// human side through the same move contract.
#[instrument]
pub fn self_play(config: EngineConfig) -> Result<(Board, GameOutcome)> {
    let mut engine = GameEngine::new(config);
    let mut human = Minimax::new(config.human, config.scoring);

    let outcome = loop {
        let outcome = if engine.computer_to_move() {
            engine.computer_move()?
        } else {
            let mut board = *engine.board();
            let result = human.search(&mut board, config.human)?;
            let pos = result
                .position
                .ok_or_else(|| anyhow::anyhow!("No move available for the human side"))?;
            engine.apply_human_move(pos.row(), pos.col())?
        };
        if outcome.is_terminal() {
            break outcome;
        }
    };

    info!(?outcome, "Self-play finished");
    Ok((*engine.board(), outcome))
}

/// Best move for the side to move on a given board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Board that was analyzed.
    pub board: String,
    /// Side to move.
    pub to_move: Player,
    /// Outcome already decided on the board.
    pub outcome: GameOutcome,
    /// Best move and its score for the side to move.
    pub best: SearchResult,
    /// Score of every legal move, in row-major order.
    pub moves: Vec<ScoredMove>,
    /// Positions visited while scoring the moves.
    pub nodes: u64,
}

/// One candidate move and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    /// Cell played.
    pub position: Position,
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
    /// Score for the side to move.
    pub score: i32,
}

/// Searches a typed board from the point of view of the side to move.
///
/// Every legal move is scored once; the best move is the first of the
/// highest scores, the same choice [`Minimax::search`] makes.
///
/// # Errors
///
/// Fails on malformed text or boards no game can reach.
#[instrument(skip(config))]
pub fn analyze(text: &str, config: EngineConfig) -> Result<Analysis> {
    let (mut board, to_move) = parse_board(text, config.first)?;
    let mut search = Minimax::new(to_move, config.scoring);
    let outcome = board.outcome();

    let scored = search.scored_moves(&mut board, to_move)?;
    let nodes = search.nodes();
    let best = match first_best(&scored) {
        Some((pos, score)) => SearchResult {
            score,
            position: Some(pos),
        },
        // Finished board: nothing to play, only the final score.
        None => search.search(&mut board, to_move)?,
    };

    let moves = scored
        .into_iter()
        .map(|(position, score)| ScoredMove {
            position,
            row: position.row(),
            col: position.col(),
            score,
        })
        .collect();

    Ok(Analysis {
        board: board.to_string(),
        to_move,
        outcome,
        best,
        moves,
        nodes,
    })
}

/// First move with the highest score, in the order given.
fn first_best(scored: &[(Position, i32)]) -> Option<(Position, i32)> {
    scored.iter().copied().fold(None, |best, candidate| match best {
        Some(current) if current.1 >= candidate.1 => Some(current),
        _ => Some(candidate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages() {
        assert_eq!(outcome_message(GameOutcome::InProgress), None);
        assert_eq!(
            outcome_message(GameOutcome::Won(Player::O)).as_deref(),
            Some("Player O wins!")
        );
        assert_eq!(outcome_message(GameOutcome::Draw).as_deref(), Some("Draw!"));
        assert_eq!(turn_message(Player::X), "Player X's turn");
    }

    #[test]
    fn test_self_play_draws() {
        let (board, outcome) = self_play(EngineConfig::default()).unwrap();
        assert_eq!(outcome, GameOutcome::Draw);
        assert!(board.is_full());
    }

    #[test]
    fn test_analyze_finds_block() {
        let analysis = analyze("XX./.O./...", EngineConfig::default()).unwrap();
        assert_eq!(analysis.to_move, Player::O);
        assert_eq!(analysis.best.position, Some(Position::TopRight));
        assert_eq!(analysis.moves.len(), 6);
        assert_eq!(analysis.outcome, GameOutcome::InProgress);
    }

    #[test]
    fn test_first_best_keeps_earliest_tie() {
        let scored = [
            (Position::TopLeft, 0),
            (Position::TopRight, 1),
            (Position::Center, 1),
        ];
        assert_eq!(first_best(&scored), Some((Position::TopRight, 1)));
        assert_eq!(first_best(&[]), None);
    }

    #[test]
    fn test_analyze_finished_board() {
        let analysis = analyze("XXX/OO./...", EngineConfig::default()).unwrap();
        assert_eq!(analysis.outcome, GameOutcome::Won(Player::X));
        assert_eq!(analysis.best.position, None);
        assert!(analysis.moves.is_empty());
    }
}
