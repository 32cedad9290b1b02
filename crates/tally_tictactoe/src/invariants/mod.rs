//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! The typestate engine checks them in debug builds after every move.

pub mod alternating_turn;
pub mod history_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;

use super::{Game, InProgress};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariants of a game in progress.
pub type GameInvariants = (AlternatingTurnInvariant, HistoryConsistentInvariant);

/// Convenience check used by tests and debug assertions.
pub fn check_in_progress(game: &Game<InProgress>) -> Result<(), Vec<InvariantViolation>> {
    GameInvariants::check_all(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameTransition, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        assert!(check_in_progress(&Game::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let positions = [Position::TopLeft, Position::Center, Position::TopRight];
        let Ok(GameTransition::InProgress(game)) = Game::replay(&positions) else {
            panic!("Expected in-progress game");
        };
        assert!(check_in_progress(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let GameTransition::InProgress(mut game) = Game::new().place(Position::Center).unwrap() else {
            panic!("Expected in-progress game");
        };
        // An extra O mark with no recorded move, and the turn pointer left on O.
        game.board.set(Position::TopLeft, Square::Occupied(Player::O));
        game.phase.to_move = Player::X;

        let violations = check_in_progress(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
