//! Functionality for converting a source buffer into a [`Token`] stream.
//!
//! [`tokenize`] works on a single buffer and stops at the first error.
//! [`TokenStream::from_source`] runs it once per line of a source file and
//! numbers the lines.
mod char_ext;
mod char_view;
mod error;
mod lexer;
mod number;
mod token_stream;

pub mod keywords;
pub mod tokens;

pub use error::*;
pub use lexer::*;
pub use token_stream::*;

#[allow(unused_imports, reason = "Docstring uses this")]
use tokens::Token;
