//! Shared key handling for editable text
//!
//! Cursor positions are counted in characters, not bytes, so multi-byte input
//! never splits a code point.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What an editing key did to the value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The text changed
    Changed,
    /// Only the cursor moved
    Moved,
    /// The key is not an editing key
    Ignored,
}

/// Text editing keys shared by the search box and form fields
pub struct TextEditKeys;

impl TextEditKeys {
    /// Apply `key` to `value` with the cursor at character index `cursor`.
    /// Enter inserts a line break only when `multiline` is set.
    pub fn apply(
        value: &mut String,
        cursor: &mut usize,
        key: KeyEvent,
        multiline: bool,
    ) -> EditOutcome {
        let len = value.chars().count();
        *cursor = (*cursor).min(len);

        match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                EditOutcome::Ignored
            }
            KeyCode::Char(c) => {
                value.insert(byte_index(value, *cursor), c);
                *cursor += 1;
                EditOutcome::Changed
            }
            KeyCode::Enter if multiline => {
                value.insert(byte_index(value, *cursor), '\n');
                *cursor += 1;
                EditOutcome::Changed
            }
            KeyCode::Backspace => {
                if *cursor == 0 {
                    return EditOutcome::Ignored;
                }
                *cursor -= 1;
                value.remove(byte_index(value, *cursor));
                EditOutcome::Changed
            }
            KeyCode::Delete => {
                if *cursor >= len {
                    return EditOutcome::Ignored;
                }
                value.remove(byte_index(value, *cursor));
                EditOutcome::Changed
            }
            KeyCode::Left => {
                *cursor = cursor.saturating_sub(1);
                EditOutcome::Moved
            }
            KeyCode::Right => {
                *cursor = (*cursor + 1).min(len);
                EditOutcome::Moved
            }
            KeyCode::Home => {
                *cursor = 0;
                EditOutcome::Moved
            }
            KeyCode::End => {
                *cursor = len;
                EditOutcome::Moved
            }
            _ => EditOutcome::Ignored,
        }
    }
}

/// Byte offset of character index `char_idx`
pub fn byte_index(value: &str, char_idx: usize) -> usize {
    value
        .char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}

/// Row and column of character index `char_idx`, for placing the terminal cursor
pub fn cursor_row_col(value: &str, char_idx: usize) -> (u16, u16) {
    let mut row = 0u16;
    let mut col = 0u16;
    for c in value.chars().take(char_idx) {
        if c == '\n' {
            row += 1;
            col = 0;
        } else {
            col += unicode_width::UnicodeWidthChar::width(c).unwrap_or(0) as u16;
        }
    }
    (row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_insert_and_delete_multibyte() {
        let mut value = String::new();
        let mut cursor = 0;
        for c in "café".chars() {
            TextEditKeys::apply(&mut value, &mut cursor, key(KeyCode::Char(c)), false);
        }
        assert_eq!(value, "café");
        assert_eq!(cursor, 4);

        TextEditKeys::apply(&mut value, &mut cursor, key(KeyCode::Left), false);
        TextEditKeys::apply(&mut value, &mut cursor, key(KeyCode::Backspace), false);
        assert_eq!(value, "caé");

        TextEditKeys::apply(&mut value, &mut cursor, key(KeyCode::Delete), false);
        assert_eq!(value, "ca");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_enter_only_breaks_lines_when_multiline() {
        let mut value = "ab".to_string();
        let mut cursor = 1;
        assert_eq!(
            TextEditKeys::apply(&mut value, &mut cursor, key(KeyCode::Enter), false),
            EditOutcome::Ignored
        );
        assert_eq!(
            TextEditKeys::apply(&mut value, &mut cursor, key(KeyCode::Enter), true),
            EditOutcome::Changed
        );
        assert_eq!(value, "a\nb");
        assert_eq!(cursor_row_col(&value, cursor), (1, 0));
    }

    #[test]
    fn test_control_chars_are_not_inserted() {
        let mut value = String::new();
        let mut cursor = 0;
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(
            TextEditKeys::apply(&mut value, &mut cursor, ctrl_s, false),
            EditOutcome::Ignored
        );
        assert!(value.is_empty());
    }

    #[test]
    fn test_backspace_at_start_is_ignored() {
        let mut value = "x".to_string();
        let mut cursor = 0;
        assert_eq!(
            TextEditKeys::apply(&mut value, &mut cursor, key(KeyCode::Backspace), false),
            EditOutcome::Ignored
        );
        assert_eq!(value, "x");
    }
}
