use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A single-line text buffer with a cursor (byte offset, always on a
/// grapheme boundary)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    /// A buffer holding `text` with the cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        TextInput { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the grapheme before the cursor
    pub fn backspace(&mut self) -> bool {
        match self.prev_boundary() {
            Some(start) => {
                self.text.replace_range(start..self.cursor, "");
                self.cursor = start;
                true
            }
            None => false,
        }
    }

    /// Delete the grapheme under the cursor
    pub fn delete(&mut self) -> bool {
        match self.next_boundary() {
            Some(end) => {
                self.text.replace_range(self.cursor..end, "");
                true
            }
            None => false,
        }
    }

    pub fn move_left(&mut self) {
        if let Some(pos) = self.prev_boundary() {
            self.cursor = pos;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(pos) = self.next_boundary() {
            self.cursor = pos;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Display column of the cursor in terminal cells
    pub fn cursor_col(&self) -> usize {
        UnicodeWidthStr::width(&self.text[..self.cursor])
    }

    /// Text split at the cursor, for rendering a cursor glyph in between
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.cursor)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .graphemes(true)
            .next()
            .map(|g| self.cursor + g.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = TextInput::default();
        for c in "Mlk".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.move_left();
        input.insert_char('i');
        assert_eq!(input.text(), "Milk");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        // e + combining acute accent is one grapheme
        let mut input = TextInput::with_text("cafe\u{301}");
        assert!(input.backspace());
        assert_eq!(input.text(), "caf");
        input.move_home();
        assert!(!input.backspace());
    }

    #[test]
    fn delete_at_cursor() {
        let mut input = TextInput::with_text("tea");
        input.move_home();
        assert!(input.delete());
        assert_eq!(input.text(), "ea");
        input.move_end();
        assert!(!input.delete());
    }

    #[test]
    fn cursor_col_counts_wide_chars() {
        let input = TextInput::with_text("\u{725B}\u{5976}");
        assert_eq!(input.cursor_col(), 4);
        assert_eq!(input.split_at_cursor(), ("\u{725B}\u{5976}", ""));
    }

    #[test]
    fn clear_resets_text_and_cursor() {
        let mut input = TextInput::with_text("abc");
        input.clear();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor(), 0);
    }
}
