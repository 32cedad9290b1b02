//! Running score tally across games in a session.

use super::{Conclusion, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win and draw counts for a session.
///
/// Counts only ever go up; [`Scoreboard::reset`] is the single way down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Games drawn.
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Total completed games.
    pub fn total_games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Counts one finished game.
    #[instrument(skip(self))]
    pub fn record(&mut self, conclusion: &Conclusion) {
        match conclusion {
            Conclusion::Won {
                player: Player::X, ..
            } => self.x_wins += 1,
            Conclusion::Won {
                player: Player::O, ..
            } => self.o_wins += 1,
            Conclusion::Draw => self.draws += 1,
        }
        debug!(
            x_wins = self.x_wins,
            o_wins = self.o_wins,
            draws = self.draws,
            "Score updated"
        );
    }

    /// Zeroes every count.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
