use std::{fmt, path::Path};

use thiserror::Error;

use crate::parsing::Rule;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{problem}: {details}")]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The text does not conform to the query grammar.
    #[error("{}", .0.short_message)]
    GrammarMismatch(GrammarMismatch),

    /// A parse node reached the flattener with no transformation for its
    /// rule. This is a bug in the grammar, never a problem with the query.
    #[error("no transformation for {rule:?} node at offset {offset}")]
    UnhandledNodeKind { rule: Rule, offset: usize },
}

impl QueryError {
    pub fn offset(&self) -> usize {
        match self {
            QueryError::GrammarMismatch(mismatch) => mismatch.offset,
            QueryError::UnhandledNodeKind { offset, .. } => *offset,
        }
    }
}

/// Something the grammar would have accepted at the point of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// An exact token, such as `")"`
    Literal(&'static str),
    /// A class of input, such as "a term"
    Described(&'static str),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Literal(token) => write!(f, "\"{}\"", token),
            Expected::Described(description) => write!(f, "{}", description),
        }
    }
}

/// Structured failure of the query grammar, positioned at the rightmost
/// offset the parser reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarMismatch {
    pub message: String,
    pub short_message: String,
    pub offset: usize,
    pub expected: Vec<Expected>,
}

impl GrammarMismatch {
    pub fn new(source: &str, offset: usize, expected: Vec<Expected>) -> GrammarMismatch {
        let (line, column) = line_and_column(source, offset);
        let text = join_expected(&expected);

        let short_message = format!("Line {}, col {}: expected {}", line, column, text);

        let code = source
            .lines()
            .nth(line - 1)
            .unwrap_or("");
        let gutter = format!("{} | ", line);
        let message = format!(
            "Line {}, col {}:\n> {}{}\n  {:>width$}\nExpected {}",
            line,
            column,
            gutter,
            code,
            '^',
            text,
            width = gutter.len() + column
        );

        GrammarMismatch {
            message,
            short_message,
            offset,
            expected,
        }
    }

    pub fn expected_text(&self) -> String {
        join_expected(&self.expected)
    }
}

fn join_expected(expected: &[Expected]) -> String {
    let items: Vec<String> = expected
        .iter()
        .map(|e| e.to_string())
        .collect();

    match items.len() {
        0 => "nothing".to_string(),
        1 => items[0].clone(),
        2 => format!("{} or {}", items[0], items[1]),
        n => format!("{}, or {}", items[..n - 1].join(", "), items[n - 1]),
    }
}

/// One-origin line and column (in characters) of a byte offset. Offsets
/// beyond the end of the text are clamped to it.
pub fn line_and_column(content: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(content.len());
    while !content.is_char_boundary(offset) {
        offset -= 1;
    }

    let before = &content[..offset];
    let line = before
        .bytes()
        .filter(|&b| b == b'\n')
        .count();

    let column = match before.rfind('\n') {
        Some(start) => before[start + 1..]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    };

    (line + 1, column + 1)
}
