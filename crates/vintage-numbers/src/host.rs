//! The boundary between the adjuster and whatever owns the document.
//!
//! A host exposes the caret set, per-line text, span replacement and an atomic caret-set
//! update. All offsets are character offsets into the document.

use crate::selection::Selection;

/// The line containing a document offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineAt {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based character column of the offset within the line.
    pub column: usize,
    /// Document offset of the first character of the line.
    pub start: usize,
    /// Line text without its terminator.
    pub text: String,
}

/// A document plus selection set that number commands can operate on.
pub trait NumberHost {
    /// Current selections, ordered by document offset and non-overlapping.
    fn selections(&self) -> Vec<Selection>;

    /// Text of `line` without its terminator; empty when out of range.
    fn line_text(&self, line: usize) -> String;

    /// `(line, column)` of a document offset. Offsets past the end map to the end.
    fn char_offset_to_position(&self, offset: usize) -> (usize, usize);

    /// Document offset of the first character of `line`, clamped to the last line.
    fn line_to_char(&self, line: usize) -> usize;

    /// Replace the characters in `start..end` with `text`, returning the change in document
    /// length.
    fn replace(&mut self, start: usize, end: usize, text: &str) -> isize;

    /// Replace the whole selection set at once.
    fn set_selections(&mut self, selections: Vec<Selection>);

    /// The line containing `offset`.
    ///
    /// `start + column` is the clamped offset, not `offset`, when `offset` lies past the end of
    /// the document.
    fn line_at(&self, offset: usize) -> LineAt {
        let (line, column) = self.char_offset_to_position(offset);
        LineAt {
            line,
            column,
            start: self.line_to_char(line),
            text: self.line_text(line),
        }
    }
}
