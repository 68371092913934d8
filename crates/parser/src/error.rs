// Error reporting with Ariadne
//
// Turns chumsky parse errors into readable diagnostics.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use chumsky::error::{Simple, SimpleReason};
use lexer::token::Token;

/// Type alias for Chumsky parser errors
pub type ParseError = Simple<Token>;

/// Renders parse errors as Ariadne reports and returns the text
pub fn render_errors(filename: &str, source: &str, errors: &[ParseError], color: bool) -> String {
    let mut out = Vec::new();

    for error in errors {
        let span = error.span();

        let report = Report::build(ReportKind::Error, filename, span.start)
            .with_config(Config::default().with_color(color))
            .with_code("E001")
            .with_message("Parse Error")
            .with_label(
                Label::new((filename, span))
                    .with_message(describe_error(error))
                    .with_color(Color::Red),
            );

        // Add expected tokens if available (limit to 5 to avoid overwhelming output)
        let report = if error.expected().len() > 0 {
            let expected: Vec<String> = error.expected().take(5).map(format_expected).collect();

            let help_msg = if error.expected().len() > 5 {
                format!("Expected one of: {}, ...", expected.join(", "))
            } else {
                format!("Expected: {}", expected.join(", "))
            };

            report.with_help(help_msg)
        } else {
            report
        };

        // Writing into a Vec<u8> cannot fail
        let _ = report
            .finish()
            .write((filename, Source::from(source)), &mut out);
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// One-line summary of a parse error
pub fn describe_error(error: &ParseError) -> String {
    match error.reason() {
        SimpleReason::Custom(msg) => msg.clone(),
        SimpleReason::Unclosed { delimiter, .. } => format!("Unclosed delimiter {}", delimiter),
        SimpleReason::Unexpected => match error.found() {
            Some(token) => format!("Unexpected {}", token.describe()),
            None => "Unexpected end of input".to_string(),
        },
    }
}

/// Format expected token for human-readable output
fn format_expected(token: &Option<Token>) -> String {
    match token {
        Some(Token::Identifier(_)) => "identifier".to_string(),
        Some(Token::Number(_)) => "number".to_string(),
        Some(Token::BigInt(_)) => "bigint".to_string(),
        Some(Token::String(_)) => "string".to_string(),
        Some(
            t @ (Token::New
            | Token::Function
            | Token::Class
            | Token::Extends
            | Token::Async
            | Token::Typeof
            | Token::Void),
        ) => format!("keyword '{}'", t),
        Some(t) => format!("'{}'", t),
        None => "end of input".to_string(),
    }
}
