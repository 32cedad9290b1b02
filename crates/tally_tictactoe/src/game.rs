//! Typestate-based game engine for tic-tac-toe.
//!
//! The game phase is encoded in the type parameter, making invalid
//! operations impossible:
//! - `Game<InProgress>` - game is ongoing, moves can be made
//! - `Game<Won>` - game ended with a winner
//! - `Game<Draw>` - game ended in a draw
//!
//! `Game<Won>` has no `place()` method and `Game<InProgress>` has no
//! `winner()` method.

use super::action::{Move, MoveError};
use super::invariants::{
    GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet,
};
use super::phases::{Conclusion, Draw, InProgress, Outcome, Won};
use super::rules::evaluate_outcome;
use super::{Board, Player, Position, Square, WinLine};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game state with typestate phase encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game<S> {
    pub(crate) board: Board,
    pub(crate) moves: Vec<Move>,
    pub(crate) phase: S,
}

/// Result of placing a mark - explicit state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Game continues with next player.
    InProgress(Game<InProgress>),
    /// Game ended with a winner.
    Won(Game<Won>),
    /// Game ended in a draw.
    Draw(Game<Draw>),
}

impl GameTransition {
    /// Outcome of the board after the transition.
    pub fn outcome(&self) -> Outcome {
        match self {
            GameTransition::InProgress(_) => Outcome::InProgress,
            GameTransition::Won(game) => Outcome::Win {
                player: game.winner(),
                line: game.line(),
            },
            GameTransition::Draw(_) => Outcome::Draw,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Constructor - always starts InProgress with X to move
// ─────────────────────────────────────────────────────────────

impl Game<InProgress> {
    /// Creates a new game in progress.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            moves: Vec::new(),
            phase: InProgress { to_move: Player::X },
        }
    }
}

impl Default for Game<InProgress> {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Only InProgress can accept moves (consuming transition)
// ─────────────────────────────────────────────────────────────

impl Game<InProgress> {
    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.phase.to_move
    }

    /// Returns the empty positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Checks whether a mark may be placed at `pos` without consuming the game.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the position is taken.
    pub fn check(&self, pos: Position) -> Result<(), MoveError> {
        if self.board.is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }

    /// Places a mark at the given position, consuming the game and returning a transition.
    ///
    /// The next state is `InProgress` if the game continues, `Won` if this
    /// move completes a line, or `Draw` if it fills the board without one.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the position is already occupied.
    /// The game is consumed either way; call [`Game::check`] first to keep it.
    #[instrument(skip(self), fields(position = ?pos, player = ?self.phase.to_move))]
    pub fn place(mut self, pos: Position) -> Result<GameTransition, MoveError> {
        self.check(pos)?;

        let player = self.phase.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.moves.push(Move::new(player, pos));

        let transition = match evaluate_outcome(&self.board) {
            Outcome::Win { player, line } => {
                debug!(?player, %line, "Line completed");
                GameTransition::Won(Game {
                    board: self.board,
                    moves: self.moves,
                    phase: Won { player, line },
                })
            }
            Outcome::Draw => {
                debug!("Board full without a line");
                GameTransition::Draw(Game {
                    board: self.board,
                    moves: self.moves,
                    phase: Draw,
                })
            }
            Outcome::InProgress => GameTransition::InProgress(Game {
                board: self.board,
                moves: self.moves,
                phase: InProgress {
                    to_move: player.opponent(),
                },
            }),
        };

        debug_assert_transition(&transition);
        Ok(transition)
    }

    /// Replays positions from a fresh game, X first.
    ///
    /// # Errors
    ///
    /// Fails on the first occupied square, or with [`MoveError::GameOver`]
    /// if positions remain after the game has finished.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<GameTransition, MoveError> {
        let mut transition = GameTransition::InProgress(Game::new());

        for &pos in positions {
            transition = match transition {
                GameTransition::InProgress(game) => game.place(pos)?,
                GameTransition::Won(_) | GameTransition::Draw(_) => {
                    return Err(MoveError::GameOver);
                }
            };
        }

        Ok(transition)
    }
}

// ─────────────────────────────────────────────────────────────
//  Common methods available on all phases
// ─────────────────────────────────────────────────────────────

impl<S> Game<S> {
    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played so far, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished phases
// ─────────────────────────────────────────────────────────────

impl Game<Won> {
    /// Returns the winner of the game.
    pub fn winner(&self) -> Player {
        self.phase.player
    }

    /// Returns the completed line.
    pub fn line(&self) -> WinLine {
        self.phase.line
    }

    /// The game's final result.
    pub fn conclusion(&self) -> Conclusion {
        Conclusion::Won {
            player: self.phase.player,
            line: self.phase.line,
        }
    }
}

impl Game<Draw> {
    /// The game's final result.
    pub fn conclusion(&self) -> Conclusion {
        Conclusion::Draw
    }
}

fn debug_assert_transition(transition: &GameTransition) {
    match transition {
        GameTransition::InProgress(game) => {
            debug_assert!(
                GameInvariants::check_all(game).is_ok(),
                "Game invariants violated: {:?}",
                GameInvariants::check_all(game)
            );
        }
        GameTransition::Won(game) => {
            debug_assert!(
                HistoryConsistentInvariant::holds(game),
                "{}",
                <HistoryConsistentInvariant as Invariant<Game<Won>>>::description()
            );
        }
        GameTransition::Draw(game) => {
            debug_assert!(
                HistoryConsistentInvariant::holds(game),
                "{}",
                <HistoryConsistentInvariant as Invariant<Game<Draw>>>::description()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_with_x() {
        let game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        assert!(game.moves().is_empty());
        assert_eq!(game.valid_moves().len(), 9);
    }

    #[test]
    fn test_place_flips_turn() {
        let GameTransition::InProgress(game) = Game::new().place(Position::Center).unwrap() else {
            panic!("First move shouldn't end game");
        };
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_place_occupied_square() {
        let GameTransition::InProgress(game) = Game::new().place(Position::Center).unwrap() else {
            panic!("First move shouldn't end game");
        };
        assert_eq!(
            game.check(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert!(game.place(Position::Center).is_err());
    }

    #[test]
    fn test_replay_stops_after_finish() {
        let positions = [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
            Position::BottomRight,
        ];
        assert_eq!(Game::replay(&positions), Err(MoveError::GameOver));
    }
}
