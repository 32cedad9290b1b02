//! Log of completed games.

use super::{Board, Conclusion};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One completed game: its result, final board, and when it ended.
///
/// Entries have no setters; once logged they never change.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct HistoryEntry {
    /// How the game ended.
    conclusion: Conclusion,
    /// The board when the game ended.
    board: Board,
    /// When the game ended.
    played_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Display label: "Player X won" or "Draw".
    pub fn label(&self) -> String {
        self.conclusion.label()
    }
}

/// Completed games, stored oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    entries: Vec<HistoryEntry>,
}

impl GameHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries newest first, the order they are shown in.
    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// The most recently completed game.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Number of completed games.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no game has been completed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, WIN_LINES};
    use chrono::TimeZone;

    fn entry(conclusion: Conclusion, hour: u32) -> HistoryEntry {
        let played_at = Utc.with_ymd_and_hms(2023, 1, 1, hour, 0, 0).unwrap();
        HistoryEntry::new(conclusion, Board::new(), played_at)
    }

    #[test]
    fn test_newest_first_reverses_storage_order() {
        let mut history = GameHistory::new();
        history.push(entry(
            Conclusion::Won {
                player: Player::X,
                line: WIN_LINES[0],
            },
            10,
        ));
        history.push(entry(
            Conclusion::Won {
                player: Player::O,
                line: WIN_LINES[4],
            },
            11,
        ));
        history.push(entry(Conclusion::Draw, 12));

        let labels: Vec<String> = history.newest_first().map(HistoryEntry::label).collect();
        assert_eq!(labels, vec!["Draw", "Player O won", "Player X won"]);
        assert_eq!(history.entries()[0].label(), "Player X won");
        assert_eq!(history.latest().map(HistoryEntry::label), Some("Draw".to_string()));
    }

    #[test]
    fn test_clear_empties_history() {
        let mut history = GameHistory::new();
        history.push(entry(Conclusion::Draw, 9));
        assert_eq!(history.len(), 1);
        history.clear();
        assert!(history.is_empty());
    }
}
