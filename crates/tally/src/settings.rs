//! User settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tally_tictactoe::Player;
use tracing::{debug, info, instrument};

/// Front-end settings.
///
/// Every field has a default, so a partial file (or no file) is fine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Display name for the X player.
    #[serde(default = "default_player_x_name")]
    player_x_name: String,

    /// Display name for the O player.
    #[serde(default = "default_player_o_name")]
    player_o_name: String,

    /// Where the terminal UI writes its logs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// How many completed games the history panel lists.
    #[serde(default = "default_history_limit")]
    history_limit: usize,
}

fn default_player_x_name() -> String {
    "Pushpa Raj".to_string()
}

fn default_player_o_name() -> String {
    "Appanna".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tally.log")
}

fn default_history_limit() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_x_name: default_player_x_name(),
            player_o_name: default_player_o_name(),
            log_file: default_log_file(),
            history_limit: default_history_limit(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(
            player_x = %settings.player_x_name,
            player_o = %settings.player_o_name,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Loads settings from `path`, or the defaults when it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Display name for `player`.
    pub fn name_for(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_x_name,
            Player::O => &self.player_o_name,
        }
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
