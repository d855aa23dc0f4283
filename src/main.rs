use std::{fs, iter};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use commandline::{Operation, Options};
use minic_lex::{error::PositionalError, lexer::TokenStream, source_map::find_line};

mod commandline;

fn main() -> Result<()> {
    let options = Options::parse();

    stderrlog::new()
        .module(module_path!())
        .verbosity(options.verbose)
        .init()?;

    let file = options.operation.file();
    let content =
        fs::read_to_string(file).with_context(|| format!("Unable to read '{}'", file))?;

    info!("Tokenizing {}", file);
    let tokens = match TokenStream::from_source(&content) {
        Ok(tokens) => tokens,
        Err(errors) => {
            for err in errors.iter() {
                describe_error(err, &content);
            }
            bail!("{} line(s) failed to tokenize", errors.len());
        }
    };

    match options.operation {
        Operation::Tokens { .. } => print!("{}", tokens),
        Operation::Check { .. } => println!("{}: {} tokens, no errors", file, tokens.size()),
    }

    Ok(())
}

fn describe_error<E: PositionalError>(err: &E, content: &str) {
    let range = err.range();
    let Some(line) = find_line(content, range.start()) else {
        println!("error: {} (at byte {})", err.describe(), range.start());
        return;
    };
    let padding = usize::from(range.start() - line.range().start());

    fn pad_char(ch: char, times: usize) -> String {
        iter::repeat(ch).take(times).collect()
    }

    let gutter = format!("{}", line.line_no());

    println!("{}| {}", gutter, line.for_display());
    println!(
        "{}| {}{}--- {}",
        pad_char(' ', gutter.len()),
        pad_char(' ', padding),
        pad_char('^', err.length().into()),
        err.describe()
    );
}
