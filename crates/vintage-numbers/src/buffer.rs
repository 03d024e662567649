//! In-memory document host.
//!
//! [`TextBuffer`] keeps the text in a Rope (O(log N) line access and editing) together with a
//! normalized selection set, and implements [`NumberHost`] so number commands can run without a
//! live editor.

use ropey::Rope;

use crate::host::NumberHost;
use crate::selection::{Selection, normalize_selections};
use crate::text::strip_line_terminator;

/// A rope-backed document with a selection set.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
    selections: Vec<Selection>,
}

impl TextBuffer {
    /// Create a buffer with a single caret at the start of the document.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selections: vec![Selection::caret(0)],
        }
    }

    /// Create a buffer with the given selections (normalized).
    pub fn with_selections(text: &str, selections: Vec<Selection>) -> Self {
        let mut buffer = Self::new(text);
        buffer.set_selections(selections);
        buffer
    }

    /// Get complete text
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Get total line count
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get total character count
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Add a selection, merging it into the existing set.
    pub fn add_selection(&mut self, selection: Selection) {
        let mut selections = std::mem::take(&mut self.selections);
        selections.push(selection);
        self.selections = normalize_selections(selections);
    }

    /// Remove every selection.
    pub fn clear_selections(&mut self) {
        self.selections.clear();
    }

    /// Get character offset from line number and column number
    ///
    /// Out-of-range lines map to the end of the document; columns are clamped to the line length.
    pub fn position_to_char_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }

        let line_start_char = self.rope.line_to_char(line);
        let line_len = self.line_text(line).chars().count();
        line_start_char + column.min(line_len)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

impl NumberHost for TextBuffer {
    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn line_text(&self, line: usize) -> String {
        if line >= self.rope.len_lines() {
            return String::new();
        }
        let text = self.rope.line(line).to_string();
        strip_line_terminator(&text).to_string()
    }

    fn char_offset_to_position(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.rope.len_chars());
        let line_idx = self.rope.char_to_line(offset);
        let line_start_char = self.rope.line_to_char(line_idx);
        (line_idx, offset - line_start_char)
    }

    fn line_to_char(&self, line: usize) -> usize {
        let last = self.rope.len_lines().saturating_sub(1);
        self.rope.line_to_char(line.min(last))
    }

    fn replace(&mut self, start: usize, end: usize, text: &str) -> isize {
        let len = self.rope.len_chars();
        let start = start.min(len);
        let end = end.clamp(start, len);

        self.rope.remove(start..end);
        self.rope.insert(start, text);

        text.chars().count() as isize - (end - start) as isize
    }

    fn set_selections(&mut self, selections: Vec<Selection>) {
        self.selections = normalize_selections(selections);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_has_caret_at_start() {
        let buffer = TextBuffer::new("abc");
        assert_eq!(buffer.selections(), vec![Selection::caret(0)]);
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = TextBuffer::default();
        assert_eq!(buffer.line_count(), 1); // Rope empty document has 1 line
        assert_eq!(buffer.char_count(), 0);
        assert_eq!(buffer.line_text(0), "");
    }

    #[test]
    fn test_line_text() {
        let buffer = TextBuffer::new("foo bar\nlorem ipsum dolor sit amet\n\nfoo baz\n");
        assert_eq!(buffer.line_text(0), "foo bar");
        assert_eq!(buffer.line_text(1), "lorem ipsum dolor sit amet");
        assert_eq!(buffer.line_text(2), "");
        assert_eq!(buffer.line_text(3), "foo baz");
        assert_eq!(buffer.line_text(42), "");
    }

    #[test]
    fn test_line_text_strips_crlf() {
        let buffer = TextBuffer::new("a 1\r\nb 2\r\n");
        assert_eq!(buffer.line_text(0), "a 1");
        assert_eq!(buffer.line_text(1), "b 2");
    }

    #[test]
    fn test_char_offset_to_position() {
        let buffer = TextBuffer::new("ABC\nDEF\nGHI");
        assert_eq!(buffer.char_offset_to_position(0), (0, 0)); // A
        assert_eq!(buffer.char_offset_to_position(2), (0, 2)); // C
        assert_eq!(buffer.char_offset_to_position(4), (1, 0)); // D
        assert_eq!(buffer.char_offset_to_position(8), (2, 0)); // G
    }

    #[test]
    fn test_position_to_char_offset() {
        let buffer = TextBuffer::new("ABC\nDEF\nGHI");
        assert_eq!(buffer.position_to_char_offset(0, 2), 2);
        assert_eq!(buffer.position_to_char_offset(1, 0), 4);
        assert_eq!(buffer.position_to_char_offset(1, 99), 7);
        assert_eq!(buffer.position_to_char_offset(9, 0), 11);
    }

    #[test]
    fn test_line_at() {
        let buffer = TextBuffer::new("foo bar baz\nfoo 123 baz");
        let line = buffer.line_at(14);
        assert_eq!(line.line, 1);
        assert_eq!(line.column, 2);
        assert_eq!(line.start, 12);
        assert_eq!(line.text, "foo 123 baz");
    }

    #[test]
    fn test_line_at_past_end_of_document() {
        let buffer = TextBuffer::new("a\nx 7");
        let line = buffer.line_at(50);
        assert_eq!((line.line, line.column, line.start), (1, 3, 2));
        assert_eq!(line.text, "x 7");
        assert_eq!(buffer.line_to_char(9), 2);
    }

    #[test]
    fn test_line_at_cjk() {
        let buffer = TextBuffer::new("你好\n世界 7");
        let line = buffer.line_at(6);
        assert_eq!((line.line, line.column, line.start), (1, 3, 3));
        assert_eq!(line.text, "世界 7");
    }

    #[test]
    fn test_replace_returns_length_delta() {
        let mut buffer = TextBuffer::new("foo 999 baz");
        assert_eq!(buffer.replace(4, 7, "1000"), 1);
        assert_eq!(buffer.text(), "foo 1000 baz");
        assert_eq!(buffer.replace(4, 8, "0"), -3);
        assert_eq!(buffer.text(), "foo 0 baz");
    }

    #[test]
    fn test_add_selection_merges() {
        let mut buffer = TextBuffer::new("0123456789");
        buffer.add_selection(Selection::new(1, 2));
        buffer.add_selection(Selection::caret(5));
        buffer.add_selection(Selection::new(10, 15));
        assert_eq!(
            buffer.selections(),
            vec![
                Selection::caret(0),
                Selection::new(1, 2),
                Selection::caret(5),
                Selection::new(10, 15),
            ]
        );

        buffer.set_selections(vec![Selection::caret(3), Selection::new(11, 13)]);
        assert_eq!(
            buffer.selections(),
            vec![Selection::caret(3), Selection::new(11, 13)]
        );
    }
}
