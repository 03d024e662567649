//! Selections and selection sets, in character offsets.

use std::ops::Range;

/// Selection direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    /// Forward selection (from start to end)
    Forward,
    /// Backward selection (from end to start)
    Backward,
}

/// A selection between two character offsets. `end` is the active (caret) side.
///
/// A zero-width selection is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Anchor offset.
    pub start: usize,
    /// Active offset.
    pub end: usize,
    /// Selection direction
    pub direction: SelectionDirection,
}

impl Selection {
    /// Create a selection, deriving its direction from the offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            direction: selection_direction(start, end),
        }
    }

    /// A zero-width selection at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Returns `true` for a zero-width selection.
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Lower offset.
    pub fn min(&self) -> usize {
        self.start.min(self.end)
    }

    /// Upper offset.
    pub fn max(&self) -> usize {
        self.start.max(self.end)
    }

    /// The covered offsets as a half-open range.
    pub fn range(&self) -> Range<usize> {
        self.min()..self.max()
    }
}

pub(crate) fn selection_direction(start: usize, end: usize) -> SelectionDirection {
    if start <= end {
        SelectionDirection::Forward
    } else {
        SelectionDirection::Backward
    }
}

/// Sort selections by document order and merge overlapping ones.
///
/// Selections that merely touch (one ends exactly where the next starts) are kept apart; exact
/// duplicates are dropped.
pub fn normalize_selections(mut selections: Vec<Selection>) -> Vec<Selection> {
    for sel in &mut selections {
        sel.direction = selection_direction(sel.start, sel.end);
    }

    selections.sort_by(|a, b| {
        a.min()
            .cmp(&b.min())
            .then_with(|| a.max().cmp(&b.max()))
            .then_with(|| a.end.cmp(&b.end))
    });

    let mut merged: Vec<Selection> = Vec::with_capacity(selections.len());
    for sel in selections {
        if let Some(last) = merged.last_mut() {
            if sel.min() < last.max() {
                // Merge to union range; canonicalize to Forward.
                *last = Selection::new(last.min().min(sel.min()), last.max().max(sel.max()));
                continue;
            }
            if sel.min() == last.min() && sel.max() == last.max() {
                continue;
            }
        }
        merged.push(sel);
    }

    merged
}
