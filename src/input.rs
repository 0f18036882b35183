//! Parsing of typed player commands.

use derive_more::Display;
use tictactoe_core::{Board, ParseBoardError, Player, Position, rules};
use tracing::instrument;

/// A line typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play at zero-based `(row, col)`. Not yet bounds-checked.
    Move {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
    /// Show the accepted commands.
    Help,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Please enter a move")]
    Empty,
    /// The text is neither a command, a cell nor coordinates.
    #[display("Unrecognized input {:?}, type help for options", _0)]
    Unrecognized(String),
}

impl std::error::Error for InputError {}

/// Help text listing the accepted commands.
pub const HELP: &str = "\
Moves:   a cell number 1-9 as drawn, `row col` counting from 1 (e.g. `2 3`),
         or a label such as `center` or `top left`
Other:   reset (r), quit (q), help (h)";

/// Parses one line of input.
///
/// Rows and columns are typed counting from 1 and returned zero-based;
/// `4 1` parses to row 3, which the engine rejects as off the board.
#[instrument]
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }

    match line.to_lowercase().as_str() {
        "r" | "reset" | "new" => return Ok(Command::Reset),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "h" | "help" | "?" => return Ok(Command::Help),
        _ => {}
    }

    let numbers: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();
    if let [row, col] = numbers.as_slice()
        && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
    {
        return match (row.checked_sub(1), col.checked_sub(1)) {
            (Some(row), Some(col)) => Ok(Command::Move { row, col }),
            _ => Err(InputError::Unrecognized(line.to_string())),
        };
    }

    Position::from_label_or_number(line)
        .map(|pos| Command::Move {
            row: pos.row(),
            col: pos.col(),
        })
        .ok_or_else(|| InputError::Unrecognized(line.to_string()))
}

/// A board typed on the command line is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardInputError {
    /// The text is not nine cells.
    #[display("{}", _0)]
    Parse(ParseBoardError),
    /// Mark counts that no alternating game can produce.
    #[display("Impossible board: {} X and {} O", x, o)]
    Unreachable {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
    /// Both players own a complete line.
    #[display("Impossible board: both X and O have three in a row")]
    BothWon,
    /// Moves were made after this player completed a line.
    #[display("Impossible board: play continued after {} won", _0)]
    PlayedAfterWin(Player),
}

impl std::error::Error for BoardInputError {}

/// Parses a board and works out whose turn it is, given who opened.
///
/// Rejects boards no game can reach: wrong mark counts, two winners,
/// or a winner who was not the last to move.
#[instrument]
pub fn parse_board(text: &str, first: Player) -> Result<(Board, Player), BoardInputError> {
    let board: Board = text.parse().map_err(BoardInputError::Parse)?;
    let x = board.count(Player::X);
    let o = board.count(Player::O);
    let (opener, second) = match first {
        Player::X => (x, o),
        Player::O => (o, x),
    };

    let to_move = if opener == second {
        first
    } else if opener == second + 1 {
        first.opponent()
    } else {
        return Err(BoardInputError::Unreachable { x, o });
    };

    let x_won = rules::has_line(&board, Player::X);
    let o_won = rules::has_line(&board, Player::O);
    if x_won && o_won {
        return Err(BoardInputError::BothWon);
    }
    // The winner made the last move, so the other side is to move.
    if let Some(winner) = board.winner()
        && to_move == winner
    {
        return Err(BoardInputError::PlayedAfterWin(winner));
    }
    Ok((board, to_move))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words() {
        assert_eq!(parse_command("reset"), Ok(Command::Reset));
        assert_eq!(parse_command(" Q "), Ok(Command::Quit));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("   "), Err(InputError::Empty));
    }

    #[test]
    fn test_parse_cell_number() {
        assert_eq!(parse_command("1"), Ok(Command::Move { row: 0, col: 0 }));
        assert_eq!(parse_command("6"), Ok(Command::Move { row: 1, col: 2 }));
        assert!(parse_command("0").is_err());
    }

    #[test]
    fn test_parse_row_col() {
        assert_eq!(parse_command("2 3"), Ok(Command::Move { row: 1, col: 2 }));
        assert_eq!(parse_command("3,1"), Ok(Command::Move { row: 2, col: 0 }));
        // Off the board, left for the engine to reject.
        assert_eq!(parse_command("4 1"), Ok(Command::Move { row: 3, col: 0 }));
        assert!(matches!(parse_command("0 1"), Err(InputError::Unrecognized(_))));
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(parse_command("center"), Ok(Command::Move { row: 1, col: 1 }));
        assert_eq!(parse_command("bottom right"), Ok(Command::Move { row: 2, col: 2 }));
        assert!(matches!(parse_command("middle"), Err(InputError::Unrecognized(_))));
    }

    #[test]
    fn test_parse_board_turn() {
        let (_, to_move) = parse_board(".........", Player::X).unwrap();
        assert_eq!(to_move, Player::X);
        let (_, to_move) = parse_board("X........", Player::X).unwrap();
        assert_eq!(to_move, Player::O);
        assert!(parse_board("X........", Player::O).is_err());
        let (_, to_move) = parse_board("O........", Player::O).unwrap();
        assert_eq!(to_move, Player::X);
    }

    #[test]
    fn test_parse_board_rejects_two_winners() {
        assert_eq!(
            parse_board("XXX/OOO/X..", Player::X),
            Err(BoardInputError::BothWon)
        );
    }

    #[test]
    fn test_parse_board_rejects_play_after_win() {
        // X completed the top row, then O moved again.
        assert_eq!(
            parse_board("XXX/OO./O..", Player::X),
            Err(BoardInputError::PlayedAfterWin(Player::X))
        );
        // O won on its last move; X to move is consistent.
        let (_, to_move) = parse_board("OOO/XX./X..", Player::X).unwrap();
        assert_eq!(to_move, Player::X);
        // X won with the final move on a full board.
        assert!(parse_board("XOX/OXO/XOX", Player::X).is_ok());
    }

    #[test]
    fn test_parse_board_rejects_impossible_counts() {
        assert_eq!(
            parse_board("XX.......", Player::X),
            Err(BoardInputError::Unreachable { x: 2, o: 0 })
        );
        assert!(matches!(
            parse_board("XX", Player::X),
            Err(BoardInputError::Parse(ParseBoardError::WrongLength(2)))
        ));
    }
}
