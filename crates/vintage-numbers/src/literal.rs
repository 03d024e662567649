//! Numeric literal scanning, classification and rendering.
//!
//! A line is scanned with a single leftmost-first alternation (octal, hex, binary, decimal), which
//! yields every maximal non-overlapping literal from left to right. Each matched literal is then
//! classified by inspecting its text:
//!
//! | unsigned text                  | radix   |
//! |--------------------------------|---------|
//! | `0`, or not starting with `0`  | decimal |
//! | `0x…` / `0X…`                  | hex     |
//! | `0b…`                          | binary  |
//! | anything else starting with `0`| octal   |
//!
//! The decimal test runs first. This keeps text such as `09` (matched by the decimal alternative)
//! classified as octal, which then fails to parse; callers treat that as "leave it alone".
//!
//! All columns are character offsets within the line, not byte offsets.

use std::fmt;
use std::sync::LazyLock;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use regex::Regex;

use crate::error::NumberError;
use crate::text::CharIndex;

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(-?0[0-7]+)|",           // oct
        r"(-?0[xX][0-9a-fA-F]+)|", // hex
        r"(-?0b[01]+)|",           // bin
        r"(-?[0-9]+)",             // dec
    ))
    .expect("numeric literal pattern is valid")
});

/// The textual radix of a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Plain decimal (`42`, `-7`, `0`).
    Decimal,
    /// Hexadecimal with a `0x`/`0X` prefix.
    Hexadecimal,
    /// Binary with a `0b` prefix.
    Binary,
    /// Octal with a single leading `0` (`017`).
    Octal,
}

impl Radix {
    /// Classify a literal's text (optionally signed).
    ///
    /// Precedence is decimal, hex, binary, octal.
    pub fn classify(number: &str) -> Self {
        let unsigned = number.strip_prefix('-').unwrap_or(number);
        if unsigned == "0" || !unsigned.starts_with('0') {
            return Self::Decimal;
        }
        match unsigned.chars().nth(1) {
            Some('x' | 'X') => Self::Hexadecimal,
            Some('b') => Self::Binary,
            _ => Self::Octal,
        }
    }

    /// Numeric base used for parsing.
    pub fn base(self) -> u32 {
        match self {
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
            Self::Binary => 2,
            Self::Octal => 8,
        }
    }

    /// Characters stripped from the unsigned text before the digits start.
    fn prefix_len(self) -> usize {
        match self {
            Self::Hexadecimal | Self::Binary => 2,
            Self::Decimal | Self::Octal => 0,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Decimal => "decimal",
            Self::Hexadecimal => "hexadecimal",
            Self::Binary => "binary",
            Self::Octal => "octal",
        };
        f.write_str(name)
    }
}

/// A literal found on a line, as a half-open character range plus its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericLiteral {
    /// Inclusive start column.
    pub start: usize,
    /// Exclusive end column.
    pub end: usize,
    /// The matched text, sign included.
    pub text: String,
}

impl NumericLiteral {
    /// Radix of this literal.
    pub fn radix(&self) -> Radix {
        Radix::classify(&self.text)
    }

    /// Parse the literal as a signed integer in its classified radix.
    pub fn value(&self) -> Result<BigInt, NumberError> {
        parse_literal(&self.text)
    }
}

/// All literals on `line`, left to right.
pub fn scan_numbers(line: &str) -> Vec<NumericLiteral> {
    let index = CharIndex::new(line);
    NUMBER_RE
        .find_iter(line)
        .map(|m| NumericLiteral {
            start: index.byte_to_char(m.start()),
            end: index.byte_to_char(m.end()),
            text: m.as_str().to_string(),
        })
        .collect()
}

/// The first literal on `line` whose end column is strictly greater than `column`.
///
/// A caret placed before or inside a literal targets it; a literal ending at or before the caret
/// is skipped.
pub fn find_first_number(line: &str, column: usize) -> Option<NumericLiteral> {
    if line.is_empty() {
        return None;
    }
    let index = CharIndex::new(line);
    NUMBER_RE.find_iter(line).find_map(|m| {
        let end = index.byte_to_char(m.end());
        (end > column).then(|| NumericLiteral {
            start: index.byte_to_char(m.start()),
            end,
            text: m.as_str().to_string(),
        })
    })
}

/// Parse a (possibly negative) literal in the radix [`Radix::classify`] assigns to it.
///
/// Values are unbounded, so any literal the scanner matches parses unless its digits do not
/// belong to its radix (`09`).
pub fn parse_literal(number: &str) -> Result<BigInt, NumberError> {
    let radix = Radix::classify(number);
    let malformed = || NumberError::Malformed {
        literal: number.to_string(),
        radix,
    };

    let (negative, unsigned) = match number.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, number),
    };
    let digits = unsigned.get(radix.prefix_len()..).ok_or_else(malformed)?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix.base()).ok_or_else(malformed)?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Render `value` in `radix` using the canonical form.
///
/// Hex and binary use a lowercase `0x`/`0b` prefix, octal a single leading `0` (zero renders as
/// `0`), decimal has no prefix. The sign comes from `value`.
pub fn render(value: &BigInt, radix: Radix) -> String {
    let sign = if value.is_negative() { "-" } else { "" };
    let magnitude = value.magnitude();
    let digits = magnitude.to_str_radix(radix.base());
    match radix {
        Radix::Decimal => value.to_string(),
        Radix::Hexadecimal => format!("{sign}0x{digits}"),
        Radix::Binary => format!("{sign}0b{digits}"),
        Radix::Octal if magnitude.is_zero() => "0".to_string(),
        Radix::Octal => format!("{sign}0{digits}"),
    }
}
