//! Command Interface Layer
//!
//! Increment and decrement share one routine; the command only decides the sign of the step.
//!
//! # Example
//!
//! ```rust
//! use vintage_numbers::{NumberCommand, NumberHost, NumberOptions, Selection, TextBuffer, execute};
//!
//! let mut buffer = TextBuffer::with_selections("foo 9 bar", vec![Selection::caret(1)]);
//!
//! let report = execute(&mut buffer, NumberCommand::Increment, NumberOptions::default());
//!
//! assert_eq!(buffer.text(), "foo 10 bar");
//! assert_eq!(buffer.selections(), vec![Selection::caret(5)]);
//! assert_eq!(report.adjusted(), 1);
//! ```

use log::{debug, trace};

use crate::adjust::{Direction, adjust_by};
use crate::delta::{TextDelta, TextDeltaEdit};
use crate::host::NumberHost;
use crate::selection::Selection;

/// Number commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberCommand {
    /// Increment the number at or after each caret
    Increment,
    /// Decrement the number at or after each caret
    Decrement,
}

impl NumberCommand {
    /// Direction the command moves numbers in.
    pub fn direction(self) -> Direction {
        match self {
            Self::Increment => Direction::Increment,
            Self::Decrement => Direction::Decrement,
        }
    }
}

impl From<Direction> for NumberCommand {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Increment => Self::Increment,
            Direction::Decrement => Self::Decrement,
        }
    }
}

/// Options that control how number commands run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberOptions {
    /// How far to move each number (the Vim count prefix, as in `5<C-a>`). `0` behaves like `1`.
    pub count: u32,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self { count: 1 }
    }
}

impl NumberOptions {
    /// Signed step applied to each number.
    pub fn step(&self, direction: Direction) -> i128 {
        i128::from(self.count.max(1)) * direction.sign()
    }
}

/// Outcome of a number command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjustReport {
    /// Replacements in the order they were applied (reverse document order).
    pub delta: TextDelta,
    /// Carets installed on the host, in document order. Empty when nothing changed.
    pub selections: Vec<Selection>,
    /// Selections left untouched: non-empty selections, carets with no number after them, and
    /// numbers that could not be reinterpreted.
    pub skipped: usize,
}

impl AdjustReport {
    /// Number of carets whose number was changed.
    pub fn adjusted(&self) -> usize {
        self.delta.edits.len()
    }

    /// Returns `true` if the document was not modified.
    pub fn is_noop(&self) -> bool {
        self.delta.is_empty()
    }
}

/// Increment or decrement the first number at or after every caret by one.
pub fn apply_to_document<H: NumberHost + ?Sized>(host: &mut H, direction: Direction) -> AdjustReport {
    execute(host, NumberCommand::from(direction), NumberOptions::default())
}

/// Run a number command against `host`.
///
/// Carets are processed in reverse document order so a replacement never invalidates the offsets
/// of carets still waiting to be processed. Each adjusted caret comes to rest on the last
/// character of its new number. The resulting caret set replaces the host's selections in a single
/// call once every caret is processed; if no caret was adjusted the host's selections are left
/// alone.
pub fn execute<H: NumberHost + ?Sized>(
    host: &mut H,
    command: NumberCommand,
    options: NumberOptions,
) -> AdjustReport {
    let step = options.step(command.direction());

    let mut selections = host.selections();
    selections.sort_by_key(Selection::min);

    let mut carets: Vec<usize> = Vec::new();
    let mut edits: Vec<TextDeltaEdit> = Vec::new();
    let mut skipped = 0;

    for selection in selections.iter().rev() {
        if !selection.is_caret() {
            trace!("skipping non-empty selection {:?}", selection.range());
            skipped += 1;
            continue;
        }

        let line = host.line_at(selection.end);
        let Some(adjustment) = adjust_by(&line.text, line.column, step) else {
            trace!("no number at or after {}:{}", line.line, line.column);
            skipped += 1;
            continue;
        };

        let start = line.start + adjustment.start;
        let end = line.start + adjustment.end;
        let shift = host.replace(start, end, &adjustment.text);
        let caret = line.start + adjustment.caret_column();
        debug!(
            "{:?} {} -> {} at {}:{}",
            command, adjustment.original, adjustment.text, line.line, adjustment.start
        );

        // Carets computed so far sit at or after this edit.
        for prior in &mut carets {
            *prior = shift_caret(*prior, start, end, shift, caret);
        }
        carets.push(caret);
        edits.push(TextDeltaEdit {
            start,
            deleted_text: adjustment.original,
            inserted_text: adjustment.text,
        });
    }

    if carets.is_empty() {
        return AdjustReport {
            delta: TextDelta { edits },
            selections: Vec::new(),
            skipped,
        };
    }

    carets.reverse();
    let new_selections: Vec<Selection> = carets.into_iter().map(Selection::caret).collect();
    host.set_selections(new_selections.clone());

    AdjustReport {
        delta: TextDelta { edits },
        selections: new_selections,
        skipped,
    }
}

/// Move a previously computed caret across a replacement of `start..end`.
///
/// A caret inside the replaced span belongs to the same number (two carets targeted it) and is
/// moved onto that number's new last character.
fn shift_caret(caret: usize, start: usize, end: usize, shift: isize, new_last: usize) -> usize {
    if caret >= end {
        caret.saturating_add_signed(shift)
    } else if caret >= start {
        new_last
    } else {
        caret
    }
}
