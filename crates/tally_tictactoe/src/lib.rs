//! Tally tic-tac-toe library - pure game logic
//!
//! # Architecture
//!
//! - **Rules**: pure outcome evaluation over a 3x3 board ([`evaluate_outcome`], [`apply_move`])
//! - **Game**: typestate engine where the phase is part of the type ([`Game`])
//! - **Session**: the current game plus a [`Scoreboard`] and [`GameHistory`]
//!
//! # Example
//!
//! ```
//! use tally_tictactoe::{Player, Session};
//!
//! let mut session = Session::new();
//! for index in [0, 3, 1, 4, 2] {
//!     session.play(index).unwrap();
//! }
//! assert_eq!(session.outcome().winner(), Some(Player::X));
//! assert_eq!(session.scoreboard().wins(Player::X), 1);
//! assert_eq!(session.history().len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod score;
mod session;
mod types;
mod wrapper;

pub use action::{Move, MoveError};
pub use game::{Game, GameTransition};
pub use history::{GameHistory, HistoryEntry};
pub use phases::{Conclusion, Draw, InProgress, Outcome, Won};
pub use position::Position;
pub use rules::{
    WIN_LINES, WinLine, apply_move, check_winner, evaluate_outcome, find_winning_line, is_draw,
    is_full, try_apply_move,
};
pub use score::Scoreboard;
pub use session::Session;
pub use types::{Board, BoardParseError, Player, Square};
pub use wrapper::AnyGame;
