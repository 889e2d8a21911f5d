//! Single-line input field buffer.
//!
//! A stripped-down editing buffer for form fields: one line, a char
//! cursor, and optional masked display. Pasted text is flattened to a
//! single line.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Glyph used for masked (password) display.
const MASK: char = '•';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBuffer {
    text: String,
    cursor: usize,
}

impl FieldBuffer {
    /// Current contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in char units.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when the trimmed contents are empty.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Display string, masking every char when requested.
    pub fn display(&self, masked: bool) -> String {
        if masked {
            self.text.chars().map(|_| MASK).collect()
        } else {
            self.text.clone()
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Inserts a single printable character at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_idx, ch);
        self.cursor += 1;
    }

    /// Inserts pasted text, keeping only the first line.
    pub fn insert_str(&mut self, text: &str) {
        let line = text.lines().next().unwrap_or("");
        for ch in line.chars() {
            self.insert_char(ch);
        }
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = char_to_byte_index(&self.text, self.cursor - 1);
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Deletes the character at the cursor (Delete key semantics).
    pub fn delete(&mut self) {
        let len = self.text.chars().count();
        if self.cursor >= len {
            return;
        }
        let start = char_to_byte_index(&self.text, self.cursor);
        let end = char_to_byte_index(&self.text, self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    /// Deletes the segment immediately to the left of the cursor.
    pub fn delete_word_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let chars: Vec<char> = self.text.chars().collect();
        let target = scan_left_segment(&chars, self.cursor);
        let start = char_to_byte_index(&self.text, target);
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor = target;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let len = self.text.chars().count();
        if self.cursor < len {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Handles an editing key. Returns true when the contents changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if matches!(key.kind, KeyEventKind::Release) {
            return false;
        }

        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_char(ch);
                true
            }
            KeyCode::Backspace if key.modifiers.contains(KeyModifiers::ALT) => {
                let before = self.text.len();
                self.delete_word_left();
                before != self.text.len()
            }
            KeyCode::Backspace => {
                let before = self.text.len();
                self.backspace();
                before != self.text.len()
            }
            KeyCode::Delete => {
                let before = self.text.len();
                self.delete();
                before != self.text.len()
            }
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let before = self.text.len();
                self.delete_word_left();
                before != self.text.len()
            }
            KeyCode::Left => {
                self.move_left();
                false
            }
            KeyCode::Right => {
                self.move_right();
                false
            }
            KeyCode::Home => {
                self.move_home();
                false
            }
            KeyCode::End => {
                self.move_end();
                false
            }
            _ => false,
        }
    }
}

fn char_to_byte_index(line: &str, col: usize) -> usize {
    if col == 0 {
        return 0;
    }
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CharClass {
    Whitespace,
    Word,
    Punct,
}

fn char_class(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if c.is_alphanumeric() || c == '_' {
        CharClass::Word
    } else {
        CharClass::Punct
    }
}

fn scan_left_segment(chars: &[char], mut idx: usize) -> usize {
    if idx == 0 {
        return 0;
    }
    let class = char_class(chars[idx - 1]);
    while idx > 0 && char_class(chars[idx - 1]) == class {
        idx -= 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace() {
        let mut field = FieldBuffer::default();
        field.insert_str("ada@example.com");
        assert_eq!(field.text(), "ada@example.com");
        assert_eq!(field.cursor(), 15);

        field.backspace();
        assert_eq!(field.text(), "ada@example.co");
    }

    #[test]
    fn masked_display_hides_every_char() {
        let mut field = FieldBuffer::default();
        field.insert_str("hunter2");
        assert_eq!(field.display(true), "•••••••");
        assert_eq!(field.display(false), "hunter2");
    }

    #[test]
    fn paste_keeps_only_the_first_line() {
        let mut field = FieldBuffer::default();
        field.insert_str("ada\nlovelace");
        assert_eq!(field.text(), "ada");
    }

    #[test]
    fn control_chars_are_rejected() {
        let mut field = FieldBuffer::default();
        field.insert_char('\t');
        field.insert_char('a');
        assert_eq!(field.text(), "a");
    }

    #[test]
    fn delete_word_left_removes_one_segment() {
        let mut field = FieldBuffer::default();
        field.insert_str("ada@example.com");

        field.delete_word_left(); // "com"
        assert_eq!(field.text(), "ada@example.");
        field.delete_word_left(); // "."
        assert_eq!(field.text(), "ada@example");
        field.delete_word_left(); // "example"
        assert_eq!(field.text(), "ada@");
    }

    #[test]
    fn mid_string_editing_uses_char_indices() {
        let mut field = FieldBuffer::default();
        field.insert_str("héllo");
        field.move_home();
        field.move_right();
        field.delete();
        assert_eq!(field.text(), "hllo");
    }

    #[test]
    fn blank_is_whitespace_insensitive() {
        let mut field = FieldBuffer::default();
        field.insert_str("   ");
        assert!(field.is_blank());
        field.insert_char('x');
        assert!(!field.is_blank());
    }
}
