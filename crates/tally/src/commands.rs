//! Non-interactive commands: `eval` and `replay`.

use crate::settings::Settings;
use anyhow::{Context, Result};
use std::io::Write;
use tally_tictactoe::{Board, Outcome, Player, Scoreboard, Session, evaluate_outcome};
use tracing::{debug, info, instrument};

/// Parses `board` and writes its grid and outcome to `out`.
#[instrument(skip(out))]
pub fn eval(board: &str, out: &mut impl Write) -> Result<Outcome> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    let outcome = evaluate_outcome(&board);
    debug!(board = %board.compact(), %outcome, "Evaluated board");

    writeln!(out, "{}", board.display())?;
    writeln!(out)?;
    writeln!(out, "Outcome: {}", outcome)?;
    Ok(outcome)
}

/// Plays `moves` through a fresh session, reporting every move to `out`.
///
/// Rejected moves are reported and skipped, just like in the terminal UI.
#[instrument(skip(settings, out))]
pub fn replay(moves: &[usize], settings: &Settings, out: &mut impl Write) -> Result<Session> {
    let mut session = Session::new();

    for (turn, &index) in moves.iter().enumerate() {
        let mover = session.to_move();
        match session.play(index) {
            Ok(outcome) => {
                if let Some(player) = mover {
                    writeln!(out, "{:>2}. {} plays {}", turn + 1, player, index)?;
                }
                if let Some(conclusion) = outcome.conclusion() {
                    writeln!(out, "    {}", conclusion.label())?;
                }
            }
            Err(e) => {
                debug!(index, error = %e, "Replay move rejected");
                writeln!(out, "{:>2}. rejected {}: {}", turn + 1, index, e)?;
            }
        }
    }

    info!(moves = moves.len(), outcome = %session.outcome(), "Replay finished");

    writeln!(out)?;
    writeln!(out, "{}", session.board().display())?;
    writeln!(out)?;
    writeln!(out, "Outcome: {}", session.outcome())?;
    writeln!(out, "{}", score_line(session.scoreboard(), settings))?;
    Ok(session)
}

/// One-line score summary using the configured player names.
pub fn score_line(score: &Scoreboard, settings: &Settings) -> String {
    format!(
        "Score: {} (X) {}, {} (O) {}, Draws {}",
        settings.name_for(Player::X),
        score.x_wins(),
        settings.name_for(Player::O),
        score.o_wins(),
        score.draws()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_eval_reports_win_and_line() {
        let mut out = Vec::new();
        let outcome = eval("XXX.OO...", &mut out).unwrap();
        assert_eq!(outcome.winner(), Some(Player::X));

        let text = output(out);
        assert!(text.starts_with("X|X|X\n-+-+-\n4|O|O"));
        assert!(text.contains("Outcome: Player X wins on [0, 1, 2]"));
    }

    #[test]
    fn test_eval_reports_draw() {
        let mut out = Vec::new();
        let outcome = eval("XOXXOOOXX", &mut out).unwrap();
        assert!(outcome.is_draw());
        assert!(output(out).contains("Outcome: Draw"));
    }

    #[test]
    fn test_eval_rejects_bad_board() {
        let mut out = Vec::new();
        let err = eval("XXQ......", &mut out).unwrap_err();
        assert!(err.to_string().contains("Invalid board"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_replay_win_updates_score() {
        let mut out = Vec::new();
        let session = replay(&[0, 3, 1, 4, 2], &Settings::default(), &mut out).unwrap();
        assert_eq!(session.scoreboard().wins(Player::X), 1);
        assert_eq!(session.history().len(), 1);

        let text = output(out);
        assert!(text.contains(" 1. X plays 0"));
        assert!(text.contains(" 2. O plays 3"));
        assert!(text.contains("    Player X won"));
        assert!(text.contains("Score: Pushpa Raj (X) 1, Appanna (O) 0, Draws 0"));
    }

    #[test]
    fn test_replay_reports_rejections_and_continues() {
        let mut out = Vec::new();
        let session = replay(&[4, 4, 12, 0], &Settings::default(), &mut out).unwrap();
        assert_eq!(session.board().occupied(), 2);
        assert_eq!(session.to_move(), Some(Player::X));

        let text = output(out);
        assert!(text.contains(" 2. rejected 4: Square Center is already occupied"));
        assert!(text.contains(" 3. rejected 12: Position 12 is off the board"));
        assert!(text.contains(" 4. O plays 0"));
        assert!(text.contains("Outcome: In progress"));
    }

    #[test]
    fn test_replay_rejects_moves_after_the_game_ends() {
        let mut out = Vec::new();
        let session = replay(&[0, 3, 1, 4, 2, 5], &Settings::default(), &mut out).unwrap();
        assert_eq!(session.board().occupied(), 5);
        assert!(output(out).contains(" 6. rejected 5: Game is already over"));
    }
}
