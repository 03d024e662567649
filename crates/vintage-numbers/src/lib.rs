#![warn(missing_docs)]
//! Vintage Numbers - Headless Number Increment/Decrement
//!
//! # Overview
//!
//! `vintage-numbers` implements the Vim `<C-a>` / `<C-x>` behaviour for editors: for every caret
//! it finds the first numeric literal at or after the caret on the same line, moves it up or down,
//! writes it back in its original radix and leaves the caret on the number's last character.
//!
//! Supported literals (all optionally negative):
//!
//! - decimal: `42`, `-7`, `0`
//! - hexadecimal: `0xff`, `0XFF` (always re-rendered lowercase)
//! - binary: `0b1010`
//! - octal: `017`
//!
//! The crate never touches a live editor. Documents are reached through the [`NumberHost`] trait;
//! [`TextBuffer`] is a rope-backed implementation for tests and tools.
//!
//! # Quick Start
//!
//! ## Single line
//!
//! ```rust
//! use vintage_numbers::{Direction, adjust};
//!
//! let adjustment = adjust("width: 0XFF;", 0, Direction::Increment).unwrap();
//! assert_eq!((adjustment.start, adjustment.end), (7, 11));
//! assert_eq!(adjustment.text, "0x100");
//! ```
//!
//! ## Whole document
//!
//! ```rust
//! use vintage_numbers::{Direction, NumberHost, Selection, TextBuffer, apply_to_document};
//!
//! let mut buffer = TextBuffer::with_selections(
//!     "-1\nfoo 2",
//!     vec![Selection::caret(0), Selection::caret(3)],
//! );
//! apply_to_document(&mut buffer, Direction::Increment);
//!
//! assert_eq!(buffer.text(), "0\nfoo 3");
//! assert_eq!(buffer.selections(), vec![Selection::caret(0), Selection::caret(6)]);
//! ```
//!
//! # Module Description
//!
//! - [`literal`] - scanning, radix classification, parsing and rendering
//! - [`adjust`] - single-line adjustment
//! - [`commands`] - increment/decrement commands over a whole caret set
//! - [`host`] - the document boundary
//! - [`buffer`] - in-memory host
//! - [`delta`] - structured record of the replacements performed
//!
//! # Logging
//!
//! Skipped carets and applied replacements are reported through the [`log`] facade at `trace`
//! and `debug` level. No logger is installed by this crate.

pub mod adjust;
pub mod buffer;
pub mod commands;
pub mod delta;
mod error;
pub mod host;
pub mod literal;
mod selection;
mod text;

pub use adjust::{Adjustment, Direction, adjust, adjust_by, update_number};
pub use buffer::TextBuffer;
pub use commands::{AdjustReport, NumberCommand, NumberOptions, apply_to_document, execute};
pub use delta::{TextDelta, TextDeltaEdit};
pub use error::NumberError;
pub use host::{LineAt, NumberHost};
pub use literal::{NumericLiteral, Radix, find_first_number, parse_literal, render, scan_numbers};
pub use selection::{Selection, SelectionDirection, normalize_selections};
