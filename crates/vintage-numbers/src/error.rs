use thiserror::Error;

use crate::literal::Radix;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced while reinterpreting a matched numeric literal.
///
/// None of these reach the caller of [`crate::apply_to_document`]: a failing caret is skipped
/// and the rest of the batch proceeds.
pub enum NumberError {
    #[error("malformed {radix} literal '{literal}'")]
    /// The matched text does not parse in its classified radix (e.g. `09` is classified as octal).
    Malformed {
        /// The matched literal text.
        literal: String,
        /// The radix the literal was classified as.
        radix: Radix,
    },
}
