// Expression Parsing Tests
//
// Literals, collections, constructors, functions and classes.

use crate::ast::{Expr, ExprKind, FunctionDef, Literal, UnaryOp};
use crate::parse_source;
use pretty_assertions::assert_eq;

fn parse_expr(input: &str) -> Expr {
    match parse_source(input) {
        Ok(expr) => expr,
        Err(errors) => panic!("Parse error for {:?}: {:?}", input, errors),
    }
}

fn kind(input: &str) -> ExprKind {
    parse_expr(input).kind
}

fn literal_kind(input: &str) -> Literal {
    match kind(input) {
        ExprKind::Literal(lit) => lit,
        other => panic!("Expected literal, got {:?}", other),
    }
}

fn function_def(input: &str) -> FunctionDef {
    match kind(input) {
        ExprKind::Function(def) => def,
        other => panic!("Expected function, got {:?}", other),
    }
}

// ==================== LITERAL TESTS ====================

#[test]
fn test_literal_number() {
    assert_eq!(literal_kind("123"), Literal::Number(123.0));
    assert_eq!(literal_kind("0.5"), Literal::Number(0.5));
    assert_eq!(literal_kind("1e3"), Literal::Number(1000.0));
}

#[test]
fn test_literal_bigint() {
    assert_eq!(literal_kind("42n"), Literal::BigInt(42));
}

#[test]
fn test_literal_string() {
    assert_eq!(literal_kind(r#""123""#), Literal::String("123".to_string()));
}

#[test]
fn test_literal_bool_and_null() {
    assert_eq!(literal_kind("true"), Literal::Bool(true));
    assert_eq!(literal_kind("false"), Literal::Bool(false));
    assert_eq!(literal_kind("null"), Literal::Null);
}

#[test]
fn test_trailing_semicolon_allowed() {
    assert_eq!(literal_kind("null;"), Literal::Null);
}

#[test]
fn test_identifier() {
    assert_eq!(kind("NaN"), ExprKind::Identifier("NaN".to_string()));
}

#[test]
fn test_literal_span() {
    let expr = parse_expr("  true");
    assert_eq!(expr.span, 2..6);
}

// ==================== COLLECTION TESTS ====================

#[test]
fn test_empty_array() {
    assert_eq!(kind("[]"), ExprKind::Array(vec![]));
}

#[test]
fn test_array_with_trailing_comma() {
    match kind("[11, 12, 13,]") {
        ExprKind::Array(items) => assert_eq!(items.len(), 3),
        other => panic!("Expected array, got {:?}", other),
    }
}

#[test]
fn test_nested_array() {
    match kind("[[1, 2], []]") {
        ExprKind::Array(items) => {
            assert!(matches!(&items[0].kind, ExprKind::Array(inner) if inner.len() == 2));
            assert!(matches!(&items[1].kind, ExprKind::Array(inner) if inner.is_empty()));
        }
        other => panic!("Expected array, got {:?}", other),
    }
}

#[test]
fn test_empty_object() {
    assert_eq!(kind("{}"), ExprKind::Object(vec![]));
}

#[test]
fn test_object_keys() {
    match kind(r#"{ a: 1, "b c": 2, 3: null }"#) {
        ExprKind::Object(props) => {
            let keys: Vec<&str> = props.iter().map(|(k, _)| k.as_str()).collect();
            assert_eq!(keys, vec!["a", "b c", "3"]);
        }
        other => panic!("Expected object, got {:?}", other),
    }
}

// ==================== CONSTRUCTOR TESTS ====================

#[test]
fn test_new_with_args() {
    match kind("new Date(0)") {
        ExprKind::New { constructor, args } => {
            assert_eq!(constructor, "Date");
            assert_eq!(args.len(), 1);
        }
        other => panic!("Expected new, got {:?}", other),
    }
}

#[test]
fn test_new_without_parens() {
    assert_eq!(
        kind("new Map"),
        ExprKind::New {
            constructor: "Map".to_string(),
            args: vec![]
        }
    );
}

#[test]
fn test_call() {
    match kind(r#"Symbol("id")"#) {
        ExprKind::Call { callee, args } => {
            assert_eq!(callee.kind, ExprKind::Identifier("Symbol".to_string()));
            assert_eq!(args.len(), 1);
        }
        other => panic!("Expected call, got {:?}", other),
    }
}

// ==================== FUNCTION TESTS ====================

#[test]
fn test_function_declaration() {
    let def = function_def("function add(a, b) { return a + b; }");
    assert_eq!(def.name.as_deref(), Some("add"));
    assert_eq!(def.params, vec!["a".to_string(), "b".to_string()]);
    assert!(!def.is_generator && !def.is_async && !def.is_arrow);
}

#[test]
fn test_generator_function() {
    let def = function_def("function* numbers() { yield 1; }");
    assert!(def.is_generator);
    assert_eq!(def.name.as_deref(), Some("numbers"));
}

#[test]
fn test_anonymous_async_generator() {
    let def = function_def("async function* () {}");
    assert!(def.is_async && def.is_generator);
    assert_eq!(def.name, None);
}

#[test]
fn test_nested_braces_in_body() {
    let def = function_def("function f() { if (x) { return { a: 1 }; } }");
    assert_eq!(def.name.as_deref(), Some("f"));
}

#[test]
fn test_generator_body_with_assignment() {
    let def = function_def("function* gen() { let i = 0; yield i; }");
    assert!(def.is_generator);
    assert_eq!(def.name.as_deref(), Some("gen"));
}

#[test]
fn test_body_with_comparison_and_logic() {
    let def = function_def("function* gen() { while (i < 3 && !done || x >= y) yield i++; }");
    assert!(def.is_generator);
}

#[test]
fn test_body_with_conditional_and_template() {
    let def = function_def("function f(a) { return a ?? `value: ${a > 1 ? \"}\" : '{'}`; }");
    assert_eq!(def.params, vec!["a".to_string()]);
}

#[test]
fn test_body_with_block_comment() {
    let def = function_def("function f() { /* { unbalanced */ return 1; }");
    assert_eq!(def.name.as_deref(), Some("f"));
}

#[test]
fn test_arrow_body_with_assignment() {
    let def = function_def("() => { let x = 1; x += 2; return x; }");
    assert!(def.is_arrow);
}

#[test]
fn test_class_body_with_fields() {
    assert!(matches!(
        kind("class Counter { count = 0; inc() { this.count += 1; } }"),
        ExprKind::Class { .. }
    ));
}

#[test]
fn test_arrow_single_param() {
    let def = function_def("x => x + 1");
    assert!(def.is_arrow);
    assert_eq!(def.params, vec!["x".to_string()]);
}

#[test]
fn test_arrow_block_body() {
    let def = function_def("(a, b) => { return a; }");
    assert!(def.is_arrow);
    assert_eq!(def.params.len(), 2);
}

#[test]
fn test_async_arrow() {
    let def = function_def("async () => {}");
    assert!(def.is_arrow && def.is_async);
}

#[test]
fn test_class() {
    assert_eq!(
        kind("class Dog extends Animal { bark() {} }"),
        ExprKind::Class {
            name: Some("Dog".to_string()),
            extends: Some("Animal".to_string()),
        }
    );
}

#[test]
fn test_parenthesised_expression_is_not_arrow() {
    assert!(matches!(
        kind("(!null)"),
        ExprKind::Unary {
            op: UnaryOp::Not,
            ..
        }
    ));
}
