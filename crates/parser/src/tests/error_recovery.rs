// Error Reporting Tests
//
// Invalid fixtures must fail to parse and render a diagnostic.

use crate::error::{describe_error, render_errors};
use crate::parse_source;

fn parse_fails(input: &str) -> bool {
    parse_source(input).is_err()
}

// ==================== SYNTAX ERROR TESTS ====================

#[test]
fn test_unclosed_bracket() {
    assert!(parse_fails("[1, 2, 3"));
}

#[test]
fn test_unclosed_paren() {
    assert!(parse_fails("Symbol(\"a\""));
}

#[test]
fn test_mismatched_delimiters() {
    assert!(parse_fails("(1 + 2]"));
}

#[test]
fn test_dangling_operator() {
    assert!(parse_fails("1 +"));
}

#[test]
fn test_two_expressions() {
    assert!(parse_fails("1 2"));
}

#[test]
fn test_new_requires_identifier() {
    assert!(parse_fails("new 5"));
}

#[test]
fn test_unbalanced_function_body() {
    assert!(parse_fails("function f() { {"));
}

#[test]
fn test_assignment_outside_body_fails() {
    assert!(parse_fails("x = 1"));
}

#[test]
fn test_lexer_error_is_reported() {
    let errors = parse_source("1 # 2").unwrap_err();
    assert!(!errors.is_empty());
    assert_eq!(errors[0].span(), 2..3);
    assert_eq!(describe_error(&errors[0]), "Unexpected invalid input");
}

#[test]
fn test_bigint_overflow_fails() {
    assert!(parse_fails("999999999999999999999999999999999999999999n"));
}

#[test]
fn test_empty_source() {
    let errors = parse_source("").unwrap_err();
    assert_eq!(describe_error(&errors[0]), "Unexpected end of input");
}

// ==================== RENDERING TESTS ====================

#[test]
fn test_render_contains_code_and_filename() {
    let source = "[1, 2";
    let errors = parse_source(source).unwrap_err();
    let text = render_errors("fixture", source, &errors, false);
    assert!(text.contains("E001"), "missing code in:\n{}", text);
    assert!(text.contains("fixture"), "missing filename in:\n{}", text);
}

#[test]
fn test_render_without_color_has_no_escapes() {
    let source = "1 +";
    let errors = parse_source(source).unwrap_err();
    let text = render_errors("fixture", source, &errors, false);
    assert!(!text.contains('\u{1b}'));
}
