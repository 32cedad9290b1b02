//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tally_tictactoe::Position;

/// Moves the cursor one square for arrow keys or `hjkl`.
///
/// The cursor stops at the edges; any other key leaves it where it is.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Up | KeyCode::Char('k') => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down | KeyCode::Char('j') => Some((row + 1, col)),
        KeyCode::Left | KeyCode::Char('h') => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right | KeyCode::Char('l') => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
