//! Errors raised while tokenizing.
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::{error::PositionalError, span::*};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorType {
    #[error("Malformed number: {0}")]
    MalformedNumber(&'static str),
    #[error("Invalid character following a numeric literal")]
    InvalidNumberSuffix,
    #[error("Unrecognized character")]
    UnrecognizedCharacter,
    #[error("Unterminated string literal")]
    UnterminatedStringLiteral,
    #[error("Invalid escape sequence: \\{0}")]
    InvalidEscape(char),
}

/// A tokenizer failure, positioned at the byte that caused it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub position: Bytes,
    pub error_type: ErrorType,
}

impl LexError {
    pub fn new(position: Bytes, error_type: ErrorType) -> Self {
        Self {
            position,
            error_type,
        }
    }

    pub(super) fn malformed_number(position: usize, reason: &'static str) -> Self {
        Self::new(Bytes::new(position), ErrorType::MalformedNumber(reason))
    }

    /// The same error, moved by `offset` bytes.
    pub fn shifted(self, offset: Bytes) -> Self {
        Self {
            position: self.position + offset,
            ..self
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at byte {}", self.error_type, self.position)
    }
}

impl PositionalError for LexError {
    fn range(&self) -> Span {
        Span::at(self.position, 1)
    }

    fn describe(&self) -> String {
        self.error_type.to_string()
    }
}
