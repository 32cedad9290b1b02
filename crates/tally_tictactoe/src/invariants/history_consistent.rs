//! History consistency invariant: recorded moves match the board.

use super::super::{Game, Square};
use super::Invariant;

/// Invariant: every recorded move owns its square and nothing else is filled.
///
/// Holds for every phase, so finished games are checked too.
pub struct HistoryConsistentInvariant;

impl<S> Invariant<Game<S>> for HistoryConsistentInvariant {
    fn holds(game: &Game<S>) -> bool {
        let board = game.board();

        game.moves().len() == board.occupied()
            && game
                .moves()
                .iter()
                .all(|m| board.get(m.position) == Square::Occupied(m.player))
    }

    fn description() -> &'static str {
        "Recorded moves match the occupied squares"
    }
}
