//! Structured text change deltas.
//!
//! Every command run reports the replacements it performed as a [`TextDelta`], so callers that
//! keep derived state (undo stacks, incremental parsers, LSP sync) can replay the change without
//! diffing old and new text.
//!
//! Offsets are **character offsets** (Unicode scalar values).

/// A single text edit expressed in character offsets.
///
/// Semantics:
/// - `start` is a character offset in the document **at the time this edit is applied**.
/// - The deleted range is defined by the length (in `char`s) of `deleted_text`.
/// - Edits inside a [`TextDelta`] must be applied **in order** to transform the "before" document
///   into the "after" document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDeltaEdit {
    /// Start character offset of the edit.
    pub start: usize,
    /// Exact deleted text.
    pub deleted_text: String,
    /// Exact inserted text.
    pub inserted_text: String,
}

impl TextDeltaEdit {
    /// Length of `deleted_text` in characters.
    pub fn deleted_len(&self) -> usize {
        self.deleted_text.chars().count()
    }

    /// Length of `inserted_text` in characters.
    pub fn inserted_len(&self) -> usize {
        self.inserted_text.chars().count()
    }

    /// Exclusive end character offset in the pre-edit document.
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.deleted_len())
    }

    /// Change in document length caused by this edit.
    pub fn len_delta(&self) -> isize {
        self.inserted_len() as isize - self.deleted_len() as isize
    }
}

/// A structured description of a document text change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDelta {
    /// Ordered list of edits that transforms the "before" document into the "after" document.
    pub edits: Vec<TextDeltaEdit>,
}

impl TextDelta {
    /// Returns `true` if this delta contains no edits.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Net change in document length, in characters.
    pub fn len_delta(&self) -> isize {
        self.edits.iter().map(TextDeltaEdit::len_delta).sum()
    }

    /// Replay the edits against `text`.
    pub fn apply_to(&self, text: &str) -> String {
        let mut chars: Vec<char> = text.chars().collect();
        for edit in &self.edits {
            let start = edit.start.min(chars.len());
            let end = edit.end().min(chars.len());
            chars.splice(start..end, edit.inserted_text.chars());
        }
        chars.into_iter().collect()
    }
}
