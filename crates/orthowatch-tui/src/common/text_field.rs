//! Single-line editable text field.
//!
//! The cursor is a character index; byte offsets are derived on demand so
//! multi-byte input (pasted names, accented emails) edits correctly.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Default, Clone)]
pub struct TextField {
    text: String,
    /// Cursor position in characters, 0..=char_count.
    cursor: usize,
}

impl TextField {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display width of the text before the cursor.
    pub fn width_before_cursor(&self) -> u16 {
        let byte_idx = self.byte_index(self.cursor);
        u16::try_from(self.text[..byte_idx].width()).unwrap_or(u16::MAX)
    }

    pub fn insert_char(&mut self, ch: char) {
        let byte_idx = self.byte_index(self.cursor);
        self.text.insert(byte_idx, ch);
        self.cursor += 1;
    }

    /// Inserts pasted text at the cursor, dropping control characters.
    pub fn insert_str(&mut self, s: &str) {
        for ch in s.chars().filter(|ch| !ch.is_control()) {
            self.insert_char(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte_idx = self.byte_index(self.cursor);
        self.text.remove(byte_idx);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.text.chars().count() {
            return;
        }
        let byte_idx = self.byte_index(self.cursor);
        self.text.remove(byte_idx);
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

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Converts a character index to a byte index.
    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(idx, _)| idx)
    }
}
