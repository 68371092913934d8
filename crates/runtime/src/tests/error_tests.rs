// Error Span and Report Tests

use crate::{eval_source, render_runtime_error, FixtureError, RuntimeError};
use pretty_assertions::assert_eq;

fn runtime_error(source: &str) -> RuntimeError {
    match eval_source(source) {
        Err(FixtureError::Runtime(error)) => error,
        other => panic!("expected runtime error from {:?}, got {:?}", source, other),
    }
}

// ==================== SPAN TESTS ====================

#[test]
fn test_error_span_covers_failing_expression() {
    let error = runtime_error("1 + Symbol()");
    assert_eq!(error.span(), Some(&(0..12)));
}

#[test]
fn test_error_span_is_innermost() {
    let error = runtime_error("[1, missing]");
    assert_eq!(error.span(), Some(&(4..11)));
}

#[test]
fn test_with_span_keeps_existing_span() {
    let error = RuntimeError::type_error("boom").with_span(2..4).with_span(0..10);
    assert_eq!(error.span(), Some(&(2..4)));
}

#[test]
fn test_error_codes() {
    assert_eq!(RuntimeError::type_error("x").code(), "E101");
    assert_eq!(RuntimeError::reference_error("x").code(), "E102");
    assert_eq!(RuntimeError::range_error("x").code(), "E103");
    assert_eq!(RuntimeError::syntax_error("x").code(), "E104");
    assert_eq!(RuntimeError::unsupported("x").code(), "E105");
}

#[test]
fn test_error_messages() {
    assert_eq!(
        RuntimeError::reference_error("foo").to_string(),
        "ReferenceError: foo is not defined"
    );
}

// ==================== REPORT TESTS ====================

#[test]
fn test_render_runtime_error() {
    let source = "[1, missing]";
    let error = runtime_error(source);
    let report = render_runtime_error("fixture", source, &error, false);
    assert!(report.contains("E102"));
    assert!(report.contains("missing is not defined"));
    assert!(report.contains("fixture"));
}

#[test]
fn test_render_parse_error() {
    let source = "[1, 2";
    let error = eval_source(source).expect_err("unclosed array");
    let report = error.render("fixture", source, false);
    assert!(report.contains("E001"));
}
