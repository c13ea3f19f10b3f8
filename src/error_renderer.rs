//! Error rendering using ariadne
//!
//! Renders any [`Error`] against the source it came from, with the offending
//! position underlined and a help note where one is available.

use crate::Error;
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<expr>";

/// Render an error with its source snippet to stderr
///
/// # Example
/// ```no_run
/// use gavel::{compile, render_error, TypeTable};
///
/// let source = "1 + \"hello\"";
/// if let Err(e) = compile(source, &TypeTable::new()) {
///     render_error(&e, source);
/// }
/// ```
pub fn render_error(error: &Error, source: &str) {
    render_error_to_writer(error, source, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, source: &str, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, source, writer, true)
}

/// Render an error to a String (useful for logs, web UIs, etc.)
pub fn render_error_to_string(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes
///
/// Same as `render_error_to_string` but without ANSI color codes, making the
/// output easier to compare in tests.
pub fn render_error_to_string_no_color(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    source: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let span = error_span(error, source);
    let message = error.message();

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_message(&message)
        .with_code(error_code(error))
        .with_config(ariadne::Config::default().with_color(use_color));

    let label = match error {
        Error::Parse(_) => "syntax error here",
        Error::Build(_) => "rejected here",
        Error::Execution(_) => "failed here",
    };
    report = report.with_label(
        Label::new((SOURCE_ID, span))
            .with_message(label)
            .with_color(colors.next()),
    );

    if let Some(help) = error.help() {
        report = report.with_help(help);
    }

    report.finish().write((SOURCE_ID, Source::from(source)), &mut *writer)
}

fn error_code(error: &Error) -> &'static str {
    match error {
        Error::Parse(_) => "parse",
        Error::Build(_) => "build",
        Error::Execution(_) => "run",
    }
}

/// The character range to underline: the character at the error's position, or
/// the end of the source when the position is unknown or past the end.
fn error_span(error: &Error, source: &str) -> std::ops::Range<usize> {
    // ariadne counts in characters, not bytes.
    let end = source.chars().count();
    let Some(start) = error.position().offset().filter(|start| *start < source.len()) else {
        return end..end;
    };
    let start = source.get(..start).map_or(end, |before| before.chars().count());
    start..(start + 1).min(end)
}
