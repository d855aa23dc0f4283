//! Lexical front end for the Mini C toolchain.
pub mod error;
pub mod lexer;
pub mod source_map;
pub mod span;
