//! Keyboard navigation helpers.

use crossterm::event::KeyCode;

use crate::games::tictactoe::Position;

/// Moves the board cursor one square in the arrow's direction.
///
/// The cursor stops at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Moves a list selection up or down, clamped to `len` rows.
pub fn move_selection(selection: usize, len: usize, key: KeyCode) -> usize {
    match key {
        KeyCode::Up => selection.saturating_sub(1),
        KeyCode::Down if selection + 1 < len => selection + 1,
        KeyCode::Home => 0,
        KeyCode::End => len.saturating_sub(1),
        _ => selection,
    }
}

/// Maps `1`-`9` to board positions 0-8.
pub fn digit_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Position::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Right), Position::TopRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Down), Position::BottomLeft);
        assert_eq!(move_cursor(Position::MiddleLeft, KeyCode::Left), Position::MiddleLeft);
    }

    #[test]
    fn test_selection_clamped() {
        assert_eq!(move_selection(0, 3, KeyCode::Up), 0);
        assert_eq!(move_selection(2, 3, KeyCode::Down), 2);
        assert_eq!(move_selection(1, 3, KeyCode::Down), 2);
        assert_eq!(move_selection(1, 3, KeyCode::End), 2);
    }

    #[test]
    fn test_digits() {
        assert_eq!(digit_position('1'), Some(Position::TopLeft));
        assert_eq!(digit_position('9'), Some(Position::BottomRight));
        assert_eq!(digit_position('0'), None);
        assert_eq!(digit_position('x'), None);
    }
}
