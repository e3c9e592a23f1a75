//! Single-line text buffer backing each form field.

use unicode_segmentation::UnicodeSegmentation;

/// Handles text editing with proper Unicode grapheme cluster support.
///
/// The cursor counts graphemes, not bytes. Control characters (including
/// newlines from pasted text) never enter the buffer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DraftInput {
    text: String,
    cursor: usize,
}

impl DraftInput {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = self.clamp_cursor(self.cursor.saturating_add(1));
    }

    pub fn enter_char(&mut self, new_char: char) {
        if new_char.is_control() {
            return;
        }
        let index = self.byte_index();
        self.text.insert(index, new_char);
        self.cursor = self.grapheme_count_before(index + new_char.len_utf8());
    }

    pub fn enter_text(&mut self, text: &str) {
        let filtered: String = text.chars().filter(|c| !c.is_control()).collect();
        if filtered.is_empty() {
            return;
        }
        let index = self.byte_index();
        self.text.insert_str(index, &filtered);
        self.cursor = self.grapheme_count_before(index + filtered.len());
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let start = self.byte_index_at(self.cursor - 1);
        let end = self.byte_index_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.move_cursor_left();
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }

        let start = self.byte_index_at(self.cursor);
        let end = self.byte_index_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text.clear();
        self.cursor = 0;
        self.enter_text(&text.into());
    }

    pub fn delete_word_backwards(&mut self) {
        while self.cursor > 0 && self.grapheme_is_whitespace(self.cursor - 1) {
            self.delete_char();
        }
        while self.cursor > 0 && !self.grapheme_is_whitespace(self.cursor - 1) {
            self.delete_char();
        }
    }

    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    // Combining marks can merge with the grapheme before them, so the cursor
    // is recounted from the byte offset rather than advanced.
    fn grapheme_count_before(&self, byte_index: usize) -> usize {
        self.text[..byte_index].graphemes(true).count()
    }

    fn grapheme_is_whitespace(&self, index: usize) -> bool {
        self.text
            .graphemes(true)
            .nth(index)
            .is_some_and(|grapheme| grapheme.chars().all(char::is_whitespace))
    }

    #[must_use]
    pub fn byte_index(&self) -> usize {
        self.byte_index_at(self.cursor)
    }

    fn byte_index_at(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.min(self.grapheme_count())
    }
}

#[cfg(test)]
mod tests {
    use super::DraftInput;

    fn draft(text: &str, cursor: usize) -> DraftInput {
        DraftInput {
            text: text.to_string(),
            cursor,
        }
    }

    #[test]
    fn set_text_moves_cursor_to_end() {
        let mut input = draft("initial", 0);
        input.set_text("Ann");
        assert_eq!(input.text(), "Ann");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn enter_char_in_middle() {
        let mut input = draft("An", 1);
        input.enter_char('n');
        assert_eq!(input.text(), "Ann");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut input = draft("", 0);
        input.enter_char('\n');
        input.enter_char('\x1b');
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn enter_text_strips_newlines_and_escapes() {
        let mut input = DraftInput::default();
        input.enter_text("Bo\x1b[2Jb\r\n");
        assert_eq!(input.text(), "Bo[2Jb");
        assert_eq!(input.cursor(), 6);
    }

    #[test]
    fn delete_char_at_start_is_noop() {
        let mut input = draft("Ann", 0);
        input.delete_char();
        assert_eq!(input.text(), "Ann");
    }

    #[test]
    fn delete_char_forward_in_middle() {
        let mut input = draft("Anxn", 2);
        input.delete_char_forward();
        assert_eq!(input.text(), "Ann");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn delete_word_backwards_multiple_words() {
        let mut input = draft("Ann Lee", 7);
        input.delete_word_backwards();
        assert_eq!(input.text(), "Ann ");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn unicode_cursor_counts_graphemes() {
        let mut input = draft("a\u{1F980}b", 1);
        input.move_cursor_right();
        assert_eq!(input.cursor(), 2);
        assert_eq!(input.byte_index(), 5);
        input.delete_char();
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn combining_mark_keeps_cursor_after_joined_grapheme() {
        let mut input = DraftInput::default();
        input.set_text("eb");
        input.move_cursor_left();
        input.enter_char('\u{301}');
        assert_eq!(input.cursor(), 1);
        input.enter_char('x');
        assert_eq!(input.text(), "e\u{301}xb");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn pasted_combining_mark_keeps_cursor_in_place() {
        let mut input = draft("eb", 1);
        input.enter_text("\u{301}");
        assert_eq!(input.cursor(), 1);
        input.enter_text("xy");
        assert_eq!(input.text(), "e\u{301}xyb");
        assert_eq!(input.cursor(), 3);
    }
}
