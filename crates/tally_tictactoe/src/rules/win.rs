//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight triples of positions that wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// Winning lines in evaluation order: rows top to bottom, columns left to
/// right, then the two diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinLine([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    WinLine([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    WinLine([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    WinLine([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    WinLine([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Finds the first completed line in [`WIN_LINES`] order.
///
/// Boards reached by legal play never complete lines for both players,
/// but constructed boards can; the table order decides those.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Player, WinLine)> {
    for line in WIN_LINES {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some((player, line));
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    find_winning_line(board).map(|(player, _)| player)
}
