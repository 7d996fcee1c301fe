//! Keyboard handling.

use crossterm::event::KeyCode;
use noughts::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor.
    Cursor(Position),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a cell directly (1-9, row-major).
    Play(Position),
    /// Start over in the current mode.
    NewGame,
    /// Start over in the other mode.
    ToggleMode,
    /// Leave the app.
    Quit,
}

/// Moves the cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    match key {
        KeyCode::Up => cursor.step(-1, 0),
        KeyCode::Down => cursor.step(1, 0),
        KeyCode::Left => cursor.step(0, -1),
        KeyCode::Right => cursor.step(0, 1),
        _ => cursor,
    }
}

/// Maps a key to a command, if it is bound.
pub fn command_for(cursor: Position, key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Command::Cursor(move_cursor(cursor, key)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlayCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Command::Play),
        KeyCode::Char('n') => Some(Command::NewGame),
        KeyCode::Char('m') => Some(Command::ToggleMode),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
    }

    #[test]
    fn test_digits_are_row_major() {
        assert_eq!(
            command_for(Position::Center, KeyCode::Char('1')),
            Some(Command::Play(Position::TopLeft))
        );
        assert_eq!(
            command_for(Position::Center, KeyCode::Char('6')),
            Some(Command::Play(Position::MiddleRight))
        );
        assert_eq!(command_for(Position::Center, KeyCode::Char('0')), None);
    }

    #[test]
    fn test_bindings() {
        assert_eq!(command_for(Position::Center, KeyCode::Enter), Some(Command::PlayCursor));
        assert_eq!(command_for(Position::Center, KeyCode::Char('q')), Some(Command::Quit));
        assert_eq!(command_for(Position::Center, KeyCode::Char('m')), Some(Command::ToggleMode));
        assert_eq!(command_for(Position::Center, KeyCode::Char('x')), None);
    }
}
