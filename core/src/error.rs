//! Errors raised while reading the line-oriented search input.

use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// The reader ran out of lines before the promised content was read.
    #[error("unexpected end of input at line {line}: expected {expected}")]
    EndOfInput { line: usize, expected: &'static str },

    /// The document count line is not a non-negative decimal integer.
    #[error("invalid document count {value:?} at line {line}: {source}")]
    InvalidDocumentCount {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
