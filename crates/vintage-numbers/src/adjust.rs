//! Single-line increment/decrement.

use log::debug;
use num_bigint::BigInt;

use crate::error::NumberError;
use crate::literal::{Radix, find_first_number, parse_literal, render};

/// Which way a number moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Add to the number.
    Increment,
    /// Subtract from the number.
    Decrement,
}

impl Direction {
    /// `+1` or `-1`.
    pub fn sign(self) -> i128 {
        match self {
            Self::Increment => 1,
            Self::Decrement => -1,
        }
    }
}

/// A replacement for one literal on a line, in character columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    /// Inclusive start column of the replaced literal.
    pub start: usize,
    /// Exclusive end column of the replaced literal.
    pub end: usize,
    /// The literal text being replaced.
    pub original: String,
    /// The re-rendered literal.
    pub text: String,
}

impl Adjustment {
    /// Column of the last character of the new text, where the caret rests afterwards.
    pub fn caret_column(&self) -> usize {
        self.start + self.text.chars().count().saturating_sub(1)
    }
}

/// Adjust the first literal at or after `column` by one.
///
/// Returns `None` when the line holds no literal ending after `column`, or when the selected
/// literal cannot be reinterpreted.
pub fn adjust(line: &str, column: usize, direction: Direction) -> Option<Adjustment> {
    adjust_by(line, column, direction.sign())
}

/// Adjust the first literal at or after `column` by `step`.
pub fn adjust_by(line: &str, column: usize, step: i128) -> Option<Adjustment> {
    let literal = find_first_number(line, column)?;
    match update_number(&literal.text, step) {
        Ok(text) => Some(Adjustment {
            start: literal.start,
            end: literal.end,
            original: literal.text,
            text,
        }),
        Err(err) => {
            debug!("leaving literal at column {} unchanged: {err}", literal.start);
            None
        }
    }
}

/// Classify, parse, add `step` and re-render a single literal.
///
/// Arithmetic is arbitrary precision; the only failure is a literal whose digits do not belong to
/// its radix.
pub fn update_number(number: &str, step: i128) -> Result<String, NumberError> {
    let radix = Radix::classify(number);
    let updated = parse_literal(number)? + BigInt::from(step);
    Ok(render(&updated, radix))
}
