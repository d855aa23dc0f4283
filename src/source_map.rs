//! Functionality for looking up lines and byte ranges in the source code.
use crate::span::{Bytes, Span};

/// Finds the line containing `target_position`.
/// Returns [`None`] if the position lies beyond the end of the source.
pub fn find_line(source: &str, target_position: Bytes) -> Option<LineContext> {
    if source.is_empty() {
        return (target_position == Bytes::new(0)).then(|| LineContext {
            line_no: 1,
            range: Span::new(Bytes::new(0), Bytes::new(0)),
            source: "",
        });
    }

    let lines = inclusive_split_lines(source);
    let mut position = Bytes::new(0);
    for (line_idx, &line) in lines.iter().enumerate() {
        let end_position = position + line.len();
        if target_position >= position && target_position < end_position {
            return Some(LineContext {
                source: line,
                range: Span::new(position, end_position),
                line_no: line_idx + 1,
            });
        }
        position = end_position;
    }

    // An offset pointing just past the final character still belongs to the last line.
    if target_position == position {
        let line = *lines.last()?;
        return Some(LineContext {
            source: line,
            range: Span::new(position - Bytes::new(line.len()), position),
            line_no: lines.len(),
        });
    }

    None
}

/// Splits the source into lines, stripping the line terminators.
/// Each line is paired with the byte offset at which it starts.
pub fn lines_with_offsets(source: &str) -> Vec<(Bytes, &str)> {
    let mut position = Bytes::new(0);
    let mut lines = vec![];
    for line in inclusive_split_lines(source) {
        lines.push((position, line.trim_end_matches(['\r', '\n'])));
        position += line.len();
    }
    lines
}

fn inclusive_split_lines(source: &str) -> Vec<&str> {
    let mut seen_lines = vec![];
    let mut start = 0;
    let mut position = 0;

    let mut char_enum = source.chars().peekable();

    while let Some(ch) = char_enum.next() {
        position += ch.len_utf8();

        // If we find an \r followed by an \n, delay recognising the line until the next iteration.
        if ch == '\n' || (ch == '\r' && char_enum.peek() != Some(&'\n')) {
            seen_lines.push(&source[start..position]);
            start = position;
        }
    }
    seen_lines.push(&source[start..position]);

    seen_lines
}

/// Contains a slice pointing to a single line in the program,
/// enhanced with contextual information describing its line number and byte range.
pub struct LineContext<'a> {
    source: &'a str,
    range: Span,
    line_no: usize,
}
impl LineContext<'_> {
    pub fn for_display(&self) -> String {
        self.source.replace(['\r', '\n'], "")
    }

    pub fn range(&self) -> Span {
        self.range
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }
}
