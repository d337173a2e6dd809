//! Error rendering using ariadne
//!
//! Compile errors carry a byte span into the source expression, which lets
//! them render with a source snippet and an annotated label. Evaluation
//! errors have no span (they arise from values, not source positions) and
//! render as a single line.

use std::io::Write;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::{CompileError, Error};

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use rebus::{compile, render_error};
///
/// let source = "1 + + 2";
/// if let Err(e) = compile(source) {
///     render_error(source, &e.into());
/// }
/// ```
pub fn render_error(source: &str, error: &Error) {
    render_error_to_writer(source, error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(source: &str, error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(source, error, writer, true)
}

/// Render an error to a String (useful for tests, web UIs, etc.)
pub fn render_error_to_string(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes, which makes the output
/// easier to compare in tests.
pub fn render_error_to_string_no_color(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    source: &str,
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match error {
        Error::Compile(compile) => render_compile(source, compile, writer, use_color),
        Error::Eval(eval) => writeln!(writer, "evaluation error: {eval}"),
    }
}

fn render_compile(
    source: &str,
    error: &CompileError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let span = error.span.0.clone();
    Report::build(ReportKind::Error, ("<expression>", span.clone()))
        .with_message(error.kind.to_string())
        .with_config(Config::default().with_color(use_color))
        .with_label(
            Label::new(("<expression>", span))
                .with_message(error.kind.to_string())
                .with_color(Color::Red),
        )
        .finish()
        .write(("<expression>", Source::from(source)), writer)
}
