//! Serializable game wrapper for typestate phases.

use super::action::{Move, MoveError};
use super::game::{Game, GameTransition};
use super::phases::{Conclusion, Draw, InProgress, Outcome, Won};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A game in any phase.
///
/// Typestate games change type on every transition; this enum lets an
/// owner (the session, a front end) hold "whatever phase we are in".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyGame {
    /// Game in progress.
    InProgress(Game<InProgress>),
    /// Game ended with a winner.
    Won(Game<Won>),
    /// Game ended in a draw.
    Draw(Game<Draw>),
}

impl Default for AnyGame {
    fn default() -> Self {
        AnyGame::InProgress(Game::new())
    }
}

impl From<GameTransition> for AnyGame {
    fn from(transition: GameTransition) -> Self {
        match transition {
            GameTransition::InProgress(g) => AnyGame::InProgress(g),
            GameTransition::Won(g) => AnyGame::Won(g),
            GameTransition::Draw(g) => AnyGame::Draw(g),
        }
    }
}

impl From<Game<InProgress>> for AnyGame {
    fn from(game: Game<InProgress>) -> Self {
        AnyGame::InProgress(game)
    }
}

impl AnyGame {
    /// Returns the board for any game phase.
    pub fn board(&self) -> &Board {
        match self {
            AnyGame::InProgress(g) => g.board(),
            AnyGame::Won(g) => g.board(),
            AnyGame::Draw(g) => g.board(),
        }
    }

    /// Returns the moves played in this game.
    pub fn moves(&self) -> &[Move] {
        match self {
            AnyGame::InProgress(g) => g.moves(),
            AnyGame::Won(g) => g.moves(),
            AnyGame::Draw(g) => g.moves(),
        }
    }

    /// Returns the current player to move, if game is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            AnyGame::InProgress(g) => Some(g.to_move()),
            _ => None,
        }
    }

    /// Returns the winner, if game is won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            AnyGame::Won(g) => Some(g.winner()),
            _ => None,
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        !matches!(self, AnyGame::InProgress(_))
    }

    /// The evaluated outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        match self {
            AnyGame::InProgress(_) => Outcome::InProgress,
            AnyGame::Won(g) => g.conclusion().into(),
            AnyGame::Draw(g) => g.conclusion().into(),
        }
    }

    /// The final result, once there is one.
    pub fn conclusion(&self) -> Option<Conclusion> {
        match self {
            AnyGame::InProgress(_) => None,
            AnyGame::Won(g) => Some(g.conclusion()),
            AnyGame::Draw(g) => Some(g.conclusion()),
        }
    }

    /// Status line: "Next player: X", "Player X wins!" or "It's a draw!".
    pub fn status_string(&self) -> String {
        match self {
            AnyGame::InProgress(g) => format!("Next player: {}", g.to_move()),
            AnyGame::Won(g) => format!("Player {} wins!", g.winner()),
            AnyGame::Draw(_) => "It's a draw!".to_string(),
        }
    }

    /// Places the next mark, returning the following phase.
    ///
    /// `self` is left untouched, so a rejected move costs nothing.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game is decided, or
    /// [`MoveError::SquareOccupied`] for a taken square.
    #[instrument(skip(self), fields(status = %self.status_string()))]
    pub fn place(&self, position: Position) -> Result<Self, MoveError> {
        match self {
            AnyGame::InProgress(game) => {
                game.check(position)?;
                let transition = game.clone().place(position)?;
                debug!(outcome = %transition.outcome(), "Move applied");
                Ok(transition.into())
            }
            AnyGame::Won(_) | AnyGame::Draw(_) => Err(MoveError::GameOver),
        }
    }
}
