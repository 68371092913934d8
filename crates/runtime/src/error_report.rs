// Error reporting with Ariadne for evaluation errors

use crate::error::{FixtureError, RuntimeError};
use ariadne::{Color, Config, Label, Report, ReportKind, Source};

/// Format a RuntimeError as an Ariadne report and return the text
pub fn render_runtime_error(filename: &str, source: &str, error: &RuntimeError, color: bool) -> String {
    let offset = error.span().map(|s| s.start).unwrap_or(0);

    let help = match error {
        RuntimeError::ReferenceError { name, .. } => {
            Some(format!("'{}' is not a global known to the evaluator", name))
        }
        RuntimeError::Unsupported { .. } => {
            Some("function bodies are parsed but never executed".to_string())
        }
        _ => None,
    };

    let report = Report::build(ReportKind::Error, filename, offset)
        .with_config(Config::default().with_color(color))
        .with_code(error.code())
        .with_message(error.to_string());

    let report = match error.span() {
        Some(span) => report.with_label(
            Label::new((filename, span.clone()))
                .with_message("thrown while evaluating this expression")
                .with_color(Color::Red),
        ),
        None => report,
    };

    let report = match help {
        Some(help) => report.with_help(help),
        None => report,
    };

    let mut out = Vec::new();
    // Writing into a Vec<u8> cannot fail
    let _ = report
        .finish()
        .write((filename, Source::from(source)), &mut out);
    String::from_utf8_lossy(&out).into_owned()
}

impl FixtureError {
    /// Render the error against the fixture source it came from
    pub fn render(&self, filename: &str, source: &str, color: bool) -> String {
        match self {
            FixtureError::Parse(errors) => {
                parser::error::render_errors(filename, source, errors, color)
            }
            FixtureError::Runtime(error) => render_runtime_error(filename, source, error, color),
        }
    }
}
