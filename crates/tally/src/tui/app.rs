//! Application state and key handling.

use super::input::move_cursor;
use crate::settings::Settings;
use crossterm::event::KeyCode;
use tally_tictactoe::{Position, Session};
use tracing::{debug, info, instrument};

/// Main application state.
pub struct App {
    session: Session,
    settings: Settings,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh session.
    pub fn new(settings: Settings) -> Self {
        Self {
            session: Session::new(),
            settings,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('n') => self.session.new_game(),
            KeyCode::Char('r') => self.session.reset_all(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.play(digit as usize - 1);
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn play(&mut self, index: usize) {
        match self.session.play(index) {
            Ok(outcome) => {
                debug!(index, %outcome, "Move accepted");
                if let Some(position) = Position::from_index(index) {
                    self.cursor = position;
                }
            }
            Err(e) => debug!(index, error = %e, "Move ignored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_tictactoe::{Player, Square};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn test_digits_play_squares() {
        let mut app = App::new(Settings::default());
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('9')]);

        let board = app.session().board();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::O));
        assert_eq!(app.cursor(), Position::BottomRight);
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = App::new(Settings::default());
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(
            app.session().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.session().to_move(), Some(Player::O));
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut app = App::new(Settings::default());
        press(&mut app, &[KeyCode::Char(' ')]);
        let before = app.session().clone();
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char(' ')]);
        assert_eq!(app.session(), &before);
    }

    #[test]
    fn test_new_game_and_reset_keys() {
        let mut app = App::new(Settings::default());
        for c in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(c));
        }
        assert_eq!(app.session().scoreboard().wins(Player::X), 1);

        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.session().board().occupied(), 0);
        assert_eq!(app.session().history().len(), 1);

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.session().scoreboard().total_games(), 0);
        assert!(app.session().history().is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Settings::default());
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());

        let mut app = App::new(Settings::default());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
