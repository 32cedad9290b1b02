//! Phase types for the typestate state machine, and game outcomes.
//!
//! Each phase marker carries exactly the data that phase guarantees:
//! a game in progress always knows who moves next, a won game always
//! knows its winner and line.

use super::{Player, WinLine};
use serde::{Deserialize, Serialize};

/// Phase: game is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InProgress {
    pub(crate) to_move: Player,
}

/// Phase: game ended with three in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Won {
    pub(crate) player: Player,
    pub(crate) line: WinLine,
}

/// Phase: game ended on a full board with no line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Draw;

/// Evaluated result of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line and at least one empty square.
    InProgress,
    /// A player completed a line.
    Win {
        /// The winning player.
        player: Player,
        /// The first completed line in evaluation order.
        line: WinLine,
    },
    /// Full board, no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<WinLine> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once the game has been decided.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The final result, or `None` while the game is still going.
    pub fn conclusion(&self) -> Option<Conclusion> {
        match *self {
            Outcome::InProgress => None,
            Outcome::Win { player, line } => Some(Conclusion::Won { player, line }),
            Outcome::Draw => Some(Conclusion::Draw),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { player, line } => write!(f, "Player {} wins on {}", player, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Result of a finished game.
///
/// Unlike [`Outcome`] this cannot be "in progress", so anything holding a
/// `Conclusion` is known to describe a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conclusion {
    /// A player completed a line.
    Won {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: WinLine,
    },
    /// Full board, no line.
    Draw,
}

impl Conclusion {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Conclusion::Won { player, .. } => Some(*player),
            Conclusion::Draw => None,
        }
    }

    /// History label: "Player X won" or "Draw".
    pub fn label(&self) -> String {
        match self {
            Conclusion::Won { player, .. } => format!("Player {} won", player),
            Conclusion::Draw => "Draw".to_string(),
        }
    }
}

impl From<Conclusion> for Outcome {
    fn from(conclusion: Conclusion) -> Self {
        match conclusion {
            Conclusion::Won { player, line } => Outcome::Win { player, line },
            Conclusion::Draw => Outcome::Draw,
        }
    }
}
