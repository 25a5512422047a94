//! Editing state of the term input line.
//!
//! Every editing operation reports whether the text changed so the owner can
//! forward exactly one term change per mutation.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Text and cursor of the input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermInput {
    value: String,
    /// Cursor position in graphemes
    cursor: usize,
}

impl TermInput {
    /// Create an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in graphemes.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display width of the text left of the cursor.
    pub fn cursor_column(&self) -> usize {
        let byte_offset = self.byte_offset(self.cursor);
        self.value[..byte_offset].width()
    }

    /// Replace the whole text and put the cursor at the end.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if value == self.value {
            return false;
        }
        self.cursor = value.graphemes(true).count();
        self.value = value;
        true
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) -> bool {
        let byte_offset = self.byte_offset(self.cursor);
        self.value.insert(byte_offset, c);
        self.cursor = self.graphemes_before(byte_offset + c.len_utf8());
        true
    }

    /// Insert text at the cursor.
    pub fn insert_str(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let byte_offset = self.byte_offset(self.cursor);
        self.value.insert_str(byte_offset, text);
        self.cursor = self.graphemes_before(byte_offset + text.len());
        true
    }

    /// Delete the grapheme before the cursor.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor = self.graphemes_before(start);
        start < end
    }

    /// Delete the grapheme at the cursor.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.value.replace_range(start..end, "");
        start < end
    }

    /// Delete everything before the cursor.
    pub fn delete_to_start(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let end = self.byte_offset(self.cursor);
        self.value.replace_range(..end, "");
        self.cursor = 0;
        end > 0
    }

    /// Clear the text.
    pub fn clear(&mut self) -> bool {
        if self.value.is_empty() {
            return false;
        }
        self.value.clear();
        self.cursor = 0;
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    fn len(&self) -> usize {
        self.value.graphemes(true).count()
    }

    /// Graphemes in `value[..byte_idx]`. Inserted marks can merge with the
    /// grapheme before them, so the cursor is recounted after each edit.
    fn graphemes_before(&self, byte_idx: usize) -> usize {
        self.value[..byte_idx].graphemes(true).count()
    }

    fn byte_offset(&self, grapheme_idx: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.value.len())
    }
}
