use owo_colors::OwoColorize;
use std::path::Path;

use super::messages::generate_error_message;
use esquery::language::{line_and_column, LoadingError, QueryError};

/// Format a query error with full details including source code context
pub fn full_parsing_error<'i>(error: &QueryError, filename: &'i Path, source: &'i str) -> String {
    let (problem, details) = generate_error_message(error);
    let (line, column) = line_and_column(source, error.offset());

    let code = source
        .lines()
        .nth(line - 1)
        .unwrap_or("");
    let code = mark_error(code, offset_within_line(source, error.offset()));
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        problem.bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a query error with concise single-line output
pub fn concise_parsing_error<'i>(error: &QueryError, filename: &'i Path, source: &'i str) -> String {
    let (problem, _) = generate_error_message(error);
    let (line, column) = line_and_column(source, error.offset());

    format!(
        "{}: {}:{}:{} {}",
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        problem.bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}:{}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    )
}

/// Reproduce the query with the character where parsing failed underlined.
/// A failure at the end of input underlines a trailing space.
pub fn mark_error(source: &str, offset: usize) -> String {
    let (before, culprit, after) = split_at_failure(source, offset);

    format!(
        "{}{}{}",
        before,
        culprit
            .underline()
            .bright_red(),
        after
    )
}

/// Byte offset of a failure relative to the start of the line it is on.
fn offset_within_line(source: &str, offset: usize) -> usize {
    let offset = offset.min(source.len());
    let start = source.as_bytes()[..offset]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    offset - start
}

/// Split text into what precedes the failing character, the character
/// itself, and what follows it.
pub fn split_at_failure(source: &str, offset: usize) -> (&str, &str, &str) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }

    let rest = &source[offset..];
    match rest
        .chars()
        .next()
    {
        Some(c) => {
            let end = offset + c.len_utf8();
            (&source[..offset], &source[offset..end], &source[end..])
        }
        None => (source, " ", ""),
    }
}
