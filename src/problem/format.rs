use super::messages::generate_error_message;
use lanes::{formatting::Render, language::LoadingError, parsing::ParsingError};
use owo_colors::OwoColorize;
use std::path::Path;

/// Format a parsing error with full details including source code context
pub fn full_parsing_error<'i>(
    error: &ParsingError,
    filename: &'i Path,
    source: &'i str,
    renderer: &dyn Render,
) -> String {
    let (problem, details) = generate_error_message(error, renderer);

    let line = error.line();
    let code = source
        .lines()
        .nth(line - 1)
        .unwrap_or("?");
    let column = calculate_column_number(code, &error.fragment()) + 1;
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

/// Format a parsing error with concise single-line output
pub fn concise_parsing_error<'i>(
    error: &ParsingError,
    filename: &'i Path,
    source: &'i str,
) -> String {
    let line = error.line();
    let code = source
        .lines()
        .nth(line - 1)
        .unwrap_or("");
    let column = calculate_column_number(code, &error.fragment()) + 1;

    format!(
        "{}: {}:{}:{} {}",
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        error
            .message()
            .bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .to_string()
            .bold()
    )
}

// Zero-origin column, in characters, where the offending text starts on its
// line. If it can't be found (it may have been normalized) point at the
// first non-blank character.
fn calculate_column_number(code: &str, fragment: &str) -> usize {
    let offset = match code.find(fragment) {
        Some(offset) if !fragment.is_empty() => offset,
        _ => code.len() - code.trim_start().len(),
    };

    code[..offset]
        .chars()
        .count()
}
