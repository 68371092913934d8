// Operator Precedence Tests

use crate::ast::{BinaryOp, Expr, ExprKind, Literal, UnaryOp};
use crate::parse_source;
use pretty_assertions::assert_eq;

fn parse_expr(input: &str) -> Expr {
    parse_source(input).unwrap_or_else(|e| panic!("Parse error for {:?}: {:?}", input, e))
}

fn binary_parts(expr: &Expr) -> (BinaryOp, &Expr, &Expr) {
    match &expr.kind {
        ExprKind::Binary { op, lhs, rhs } => (*op, lhs, rhs),
        other => panic!("Expected binary, got {:?}", other),
    }
}

#[test]
fn test_double_not_nests_right() {
    let expr = parse_expr("!!null");
    match expr.kind {
        ExprKind::Unary { op: UnaryOp::Not, expr: inner } => match inner.kind {
            ExprKind::Unary { op: UnaryOp::Not, expr: innermost } => {
                assert_eq!(innermost.kind, ExprKind::Literal(Literal::Null));
                assert_eq!(innermost.span, 2..6);
            }
            other => panic!("Expected inner not, got {:?}", other),
        },
        other => panic!("Expected not, got {:?}", other),
    }
}

#[test]
fn test_equality_binds_looser_than_addition() {
    let expr = parse_expr(r#""1" + 2 == 12"#);
    let (op, lhs, _) = binary_parts(&expr);
    assert_eq!(op, BinaryOp::LooseEq);
    assert_eq!(binary_parts(lhs).0, BinaryOp::Add);
}

#[test]
fn test_multiplication_binds_tighter() {
    let expr = parse_expr("1 + 2 * 3");
    let (op, _, rhs) = binary_parts(&expr);
    assert_eq!(op, BinaryOp::Add);
    assert_eq!(binary_parts(rhs).0, BinaryOp::Mul);
}

#[test]
fn test_subtraction_is_left_associative() {
    let expr = parse_expr("10 - 4 - 3");
    let (op, lhs, rhs) = binary_parts(&expr);
    assert_eq!(op, BinaryOp::Sub);
    assert_eq!(binary_parts(lhs).0, BinaryOp::Sub);
    assert_eq!(rhs.kind, ExprKind::Literal(Literal::Number(3.0)));
}

#[test]
fn test_strict_and_loose_equality() {
    assert_eq!(binary_parts(&parse_expr("1 === 1")).0, BinaryOp::StrictEq);
    assert_eq!(binary_parts(&parse_expr("1 !== 1")).0, BinaryOp::StrictNotEq);
    assert_eq!(binary_parts(&parse_expr("1 != 1")).0, BinaryOp::LooseNotEq);
}

#[test]
fn test_unary_binds_tighter_than_binary() {
    let expr = parse_expr("-1 / 0");
    let (op, lhs, _) = binary_parts(&expr);
    assert_eq!(op, BinaryOp::Div);
    assert!(matches!(lhs.kind, ExprKind::Unary { op: UnaryOp::Negate, .. }));
}

#[test]
fn test_typeof_applies_to_operand_only() {
    let expr = parse_expr("typeof null == \"object\"");
    let (op, lhs, _) = binary_parts(&expr);
    assert_eq!(op, BinaryOp::LooseEq);
    assert!(matches!(lhs.kind, ExprKind::Unary { op: UnaryOp::Typeof, .. }));
}

#[test]
fn test_binary_span_covers_operands() {
    let expr = parse_expr(r#""123" == 123"#);
    assert_eq!(expr.span, 0..12);
}
