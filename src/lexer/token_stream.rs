//! The token buffer handed to the parser.
use std::{
    collections::VecDeque,
    fmt::{self, Display},
};

use log::debug;
use thiserror::Error;

use crate::source_map::lines_with_offsets;

use super::{error::LexError, lexer::tokenize, tokens::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StreamError {
    #[error("token stream exhausted")]
    Exhausted,
}

/// An ordered queue of tokens, consumed from the front.
#[derive(Debug, Default)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into(),
        }
    }

    /// Tokenizes `source` one line at a time, numbering lines from 1.
    ///
    /// Token and error positions are offsets into the whole of `source`. Every
    /// line is tokenized even after a failure, so the error list holds the
    /// first error of each failing line.
    pub fn from_source(source: &str) -> Result<Self, Vec<LexError>> {
        let mut tokens = vec![];
        let mut errors = vec![];

        for (line_idx, (line_start, line)) in lines_with_offsets(source).into_iter().enumerate() {
            let line_no = line_idx + 1;
            match tokenize(line.as_bytes()) {
                Ok(raw_tokens) => {
                    debug!("Line {}: {} tokens", line_no, raw_tokens.len());
                    tokens.extend(raw_tokens.into_iter().map(|raw| {
                        let position = raw.position + line_start;
                        Token::new(RawToken { position, ..raw }, line_no)
                    }));
                }
                Err(error) => {
                    debug!("Line {}: {}", line_no, error);
                    errors.push(error.shifted(line_start));
                }
            }
        }

        if errors.is_empty() {
            Ok(Self::new(tokens))
        } else {
            Err(errors)
        }
    }

    /// The number of tokens not yet consumed.
    pub fn size(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the next token without consuming it.
    pub fn peek(&self) -> Result<&Token, StreamError> {
        self.tokens.front().ok_or(StreamError::Exhausted)
    }

    /// Discards the next token.
    pub fn pop(&mut self) -> Result<(), StreamError> {
        self.tokens
            .pop_front()
            .map(|_| ())
            .ok_or(StreamError::Exhausted)
    }

    /// Removes and returns the next token.
    pub fn consume(&mut self) -> Result<Token, StreamError> {
        self.tokens.pop_front().ok_or(StreamError::Exhausted)
    }

    /// Returns the token `index` places ahead of the next one.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}

impl Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for token in self.tokens.iter() {
            writeln!(f, "{}", token)?;
        }
        Ok(())
    }
}
