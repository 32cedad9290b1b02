//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are separated from board storage
//! and from the session so that front ends can evaluate arbitrary boards.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, WinLine, check_winner, find_winning_line};

use super::{Board, MoveError, Outcome, Player, Position, Square};
use tracing::{debug, instrument};

/// Evaluates a board: a completed line first, then a full board, else in progress.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some((player, line)) = find_winning_line(board) {
        return Outcome::Win { player, line };
    }

    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Places `player`'s mark at `index`, returning the new board and its outcome.
///
/// # Errors
///
/// - [`MoveError::OutOfBounds`] if `index` is not 0-8
/// - [`MoveError::GameOver`] if `board` already has a result
/// - [`MoveError::SquareOccupied`] if the square is taken
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn try_apply_move(
    board: &Board,
    index: usize,
    player: Player,
) -> Result<(Board, Outcome), MoveError> {
    let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

    if evaluate_outcome(board).is_over() {
        return Err(MoveError::GameOver);
    }

    if !board.is_empty(position) {
        return Err(MoveError::SquareOccupied(position));
    }

    let mut next = *board;
    next.set(position, Square::Occupied(player));
    let outcome = evaluate_outcome(&next);
    Ok((next, outcome))
}

/// Places `player`'s mark at `index`; a rejected move is a no-op.
///
/// Rejection returns the input board unchanged together with its current
/// outcome, so calling this twice on the same index changes nothing the
/// second time.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize, player: Player) -> (Board, Outcome) {
    match try_apply_move(board, index, player) {
        Ok(result) => result,
        Err(error) => {
            debug!(%error, "Move rejected");
            (*board, evaluate_outcome(board))
        }
    }
}
