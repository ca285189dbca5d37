//! Error types for input parsing

use thiserror::Error;

/// Errors raised while validating practice-sheet input
#[derive(Debug, Error)]
pub enum InputError {
    /// A character-mode line did not split into label + glyph
    #[error("line {line}: expected 2 whitespace-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    /// A phrase payload line is shorter than the slot count
    #[error("line {line}: phrase payload has {found} slots, expected at least {expected}")]
    PayloadTooShort {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A phrase file is not made of label/payload/reserved triples
    #[error("phrase input has {lines} lines, expected a multiple of 3")]
    TripleCount { lines: usize },
}

pub type Result<T> = std::result::Result<T, InputError>;
