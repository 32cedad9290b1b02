//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Game, InProgress, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Recorded moves go X, O, X, O, ... and `to_move` is whoever comes next.
pub struct AlternatingTurnInvariant;

impl Invariant<Game<InProgress>> for AlternatingTurnInvariant {
    fn holds(game: &Game<InProgress>) -> bool {
        let moves = game.moves();

        if moves.first().is_some_and(|m| m.player != Player::X) {
            return false;
        }

        if moves.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if moves.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameTransition, Move, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let positions = [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ];
        let Ok(GameTransition::InProgress(game)) = Game::replay(&positions) else {
            panic!("Expected in-progress game");
        };
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = Game::new();
        game.moves.push(Move::new(Player::X, Position::TopLeft));
        game.moves.push(Move::new(Player::X, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
