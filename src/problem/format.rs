use super::messages::generate_error_message;
use owo_colors::OwoColorize;
use std::path::Path;
use swalpa::{
    formatting::Render,
    language::{LoadingError, SwalpaError},
};

/// Format an error with full details including the source line it came from
pub fn full_swalpa_error<'i>(
    error: &SwalpaError,
    filename: &'i Path,
    source: &'i str,
    renderer: &impl Render,
) -> String {
    let (problem, details) = generate_error_message(error, renderer);
    let line = error.line();

    if line == 0 {
        return format!(
            "{}: {} {}\n\n{}",
            "error".bright_red(),
            filename.to_string_lossy(),
            problem.bold(),
            details
        );
    }

    let code = source
        .lines()
        .nth(line - 1)
        .unwrap_or("?");
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {}

{}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        problem.bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format an error with concise single-line output
pub fn concise_swalpa_error<'i>(error: &SwalpaError, filename: &'i Path, renderer: &impl Render) -> String {
    let (problem, _) = generate_error_message(error, renderer);

    match error.line() {
        0 => format!(
            "{}: {} {}",
            "error".bright_red(),
            filename.to_string_lossy(),
            problem.bold(),
        ),
        line => format!(
            "{}: {}:{} {}",
            "error".bright_red(),
            filename.to_string_lossy(),
            line,
            problem.bold(),
        ),
    }
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
            .problem
            .bold()
    )
}
