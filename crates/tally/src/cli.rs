//! Command-line interface for tally.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tally_tictactoe::Position;

/// Tally - tic-tac-toe with a running score board
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Tic-tac-toe with a running score board and game history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file
    #[arg(short, long, global = true, default_value = "tally.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Evaluate a board such as "XXX.OO..." and print its outcome
    Eval {
        /// Nine cells in row-major order (X, O, or . for empty); `|` and newlines are ignored
        board: String,
    },

    /// Play a sequence of squares from an empty board
    Replay {
        /// Square indices (0-8, row-major from the top-left) or labels such as "center"
        #[arg(required = true, num_args = 1.., value_parser = parse_square)]
        moves: Vec<usize>,
    },
}

/// Parses a square as an index or a label.
///
/// Any number is accepted so that off-board indices reach the session and
/// are reported as rejected moves.
fn parse_square(s: &str) -> Result<usize, String> {
    if let Ok(index) = s.trim().parse::<usize>() {
        return Ok(index);
    }
    Position::from_label_or_number(s)
        .map(Position::to_index)
        .ok_or_else(|| format!("{:?} is not a square index or label", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_with_default_config() {
        let cli = Cli::try_parse_from(["tally", "play"]).unwrap();
        assert_eq!(cli.command, Command::Play);
        assert_eq!(cli.config, PathBuf::from("tally.toml"));
    }

    #[test]
    fn test_parse_eval_with_config_after_subcommand() {
        let cli = Cli::try_parse_from(["tally", "eval", "XXX.OO...", "--config", "mine.toml"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Eval {
                board: "XXX.OO...".to_string()
            }
        );
        assert_eq!(cli.config, PathBuf::from("mine.toml"));
    }

    #[test]
    fn test_parse_replay_moves() {
        let cli = Cli::try_parse_from(["tally", "replay", "0", "3", "1", "4", "2"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Replay {
                moves: vec![0, 3, 1, 4, 2]
            }
        );
    }

    #[test]
    fn test_parse_replay_labels() {
        let cli = Cli::try_parse_from(["tally", "replay", "center", "Top-left", "8", "12"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Replay {
                moves: vec![4, 0, 8, 12]
            }
        );
    }

    #[test]
    fn test_replay_rejects_unknown_labels() {
        let err = Cli::try_parse_from(["tally", "replay", "corner-ish"]).unwrap_err();
        assert!(err.to_string().contains("not a square index or label"));
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tally", "replay"]).is_err());
        assert!(Cli::try_parse_from(["tally", "replay", "-1"]).is_err());
    }
}
