//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Player, Position};

/// Every winning line: the three rows, the three columns, then the two
/// diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. Lines that are empty or partially filled never win.
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let mark = board.get(a);
        if mark == board.get(b)
            && mark == board.get(c)
            && let Some(player) = mark.player()
        {
            return Some(player);
        }
    }

    None
}

/// Returns true if `player` owns at least one complete line.
pub fn has_line(board: &Board, player: Player) -> bool {
    let mark = Mark::from(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == mark))
}
