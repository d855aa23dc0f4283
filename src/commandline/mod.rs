use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(about = "Tokenizer for Mini C")]
pub struct Options {
    #[clap(subcommand)]
    pub operation: Operation,
    #[clap(short, long, default_value_t = 1)]
    pub verbose: usize,
}

#[derive(Debug, Subcommand)]
pub enum Operation {
    /// Print every token of a program, with its line and byte offset
    Tokens { file: String },
    /// Check a program for lexical errors
    Check { file: String },
}

impl Operation {
    pub fn file(&self) -> &str {
        match self {
            Operation::Tokens { file } | Operation::Check { file } => file,
        }
    }
}
