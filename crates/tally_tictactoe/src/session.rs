//! A play session: the current game plus score and history across games.

use super::action::MoveError;
use super::history::{GameHistory, HistoryEntry};
use super::phases::Outcome;
use super::score::Scoreboard;
use super::wrapper::AnyGame;
use super::{Board, Player, Position};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Everything one front end owns while playing.
///
/// Every operation runs to completion before the next; there is no
/// shared state and nothing blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    game: AnyGame,
    scoreboard: Scoreboard,
    history: GameHistory,
}

impl Session {
    /// Starts a session with an empty board, X to move, and no score.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current game.
    pub fn game(&self) -> &AnyGame {
        &self.game
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        self.game.outcome()
    }

    /// The player to move, while the game is in progress.
    pub fn to_move(&self) -> Option<Player> {
        self.game.to_move()
    }

    /// Score across all games since the last reset.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Completed games since the last reset.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Plays the current player's mark at `index`, timestamping a finished game now.
    ///
    /// # Errors
    ///
    /// Returns why the move was rejected; the session is unchanged in that case.
    pub fn play(&mut self, index: usize) -> Result<Outcome, MoveError> {
        self.play_at(index, Utc::now())
    }

    /// Plays the current player's mark at `index`.
    ///
    /// A move that finishes the game bumps the scoreboard and logs one
    /// history entry stamped `played_at`.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`], [`MoveError::SquareOccupied`] or
    /// [`MoveError::GameOver`]; the session is unchanged in every case.
    #[instrument(skip(self), fields(to_move = ?self.game.to_move()))]
    pub fn play_at(&mut self, index: usize, played_at: DateTime<Utc>) -> Result<Outcome, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let next = self.game.place(position)?;

        if let Some(conclusion) = next.conclusion() {
            info!(result = %conclusion.label(), "Game finished");
            self.scoreboard.record(&conclusion);
            self.history
                .push(HistoryEntry::new(conclusion, *next.board(), played_at));
        }

        self.game = next;
        Ok(self.game.outcome())
    }

    /// Clears the board for another game; score and history are kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        debug!(games = self.history.len(), "Starting new game");
        self.game = AnyGame::default();
    }

    /// Clears the board, the scoreboard, and the history.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        info!(games = self.history.len(), "Resetting session");
        self.game = AnyGame::default();
        self.scoreboard.reset();
        self.history.clear();
    }
}
