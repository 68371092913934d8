// Arithmetic and comparison operators
//
// Unary and binary operator semantics over runtime values, including the
// implicit conversions of loose equality and `+`.

use parser::ast::{BinaryOp, UnaryOp};

use crate::classify::coarse_type;
use crate::coerce::{
    Hint, Numeric, string_to_bigint, string_to_number, to_boolean, to_number, to_numeric,
    to_primitive, to_string,
};
use crate::error::{RuntimeError, RuntimeResult};
use crate::value::Value;

pub fn apply_unary(op: UnaryOp, value: Value) -> RuntimeResult<Value> {
    match op {
        UnaryOp::Not => Ok(Value::Boolean(!to_boolean(&value))),
        UnaryOp::Negate => match to_numeric(&value)? {
            Numeric::Number(n) => Ok(Value::Number(-n)),
            Numeric::BigInt(n) => n
                .checked_neg()
                .map(Value::BigInt)
                .ok_or_else(|| RuntimeError::range_error("Maximum BigInt size exceeded")),
        },
        UnaryOp::Plus => to_number(&value).map(Value::Number),
        UnaryOp::Typeof => Ok(Value::string(coarse_type(&value).as_str())),
        UnaryOp::Void => Ok(Value::Undefined),
    }
}

pub fn apply_binary(op: BinaryOp, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
    match op {
        BinaryOp::Add => add(lhs, rhs),
        BinaryOp::Sub => arithmetic(lhs, rhs, |a, b| a - b, i128::checked_sub),
        BinaryOp::Mul => arithmetic(lhs, rhs, |a, b| a * b, i128::checked_mul),
        BinaryOp::Div => {
            if is_bigint_zero(rhs) {
                return Err(RuntimeError::range_error("Division by zero"));
            }
            arithmetic(lhs, rhs, |a, b| a / b, i128::checked_div)
        }
        BinaryOp::Mod => {
            if is_bigint_zero(rhs) {
                return Err(RuntimeError::range_error("Division by zero"));
            }
            arithmetic(lhs, rhs, |a, b| a % b, i128::checked_rem)
        }
        BinaryOp::LooseEq => loose_equals(lhs, rhs).map(Value::Boolean),
        BinaryOp::LooseNotEq => loose_equals(lhs, rhs).map(|eq| Value::Boolean(!eq)),
        BinaryOp::StrictEq => Ok(Value::Boolean(lhs.strict_equals(rhs))),
        BinaryOp::StrictNotEq => Ok(Value::Boolean(!lhs.strict_equals(rhs))),
    }
}

fn is_bigint_zero(value: &Value) -> bool {
    matches!(value, Value::BigInt(0))
}

/// `+`: string concatenation if either primitive is a string, numeric addition otherwise
fn add(lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
    let lhs = to_primitive(lhs, Hint::Default)?;
    let rhs = to_primitive(rhs, Hint::Default)?;

    if matches!(lhs, Value::String(_)) || matches!(rhs, Value::String(_)) {
        return Ok(Value::String(to_string(&lhs)? + &to_string(&rhs)?));
    }
    arithmetic(&lhs, &rhs, |a, b| a + b, i128::checked_add)
}

fn arithmetic(
    lhs: &Value,
    rhs: &Value,
    number_op: fn(f64, f64) -> f64,
    bigint_op: fn(i128, i128) -> Option<i128>,
) -> RuntimeResult<Value> {
    match (to_numeric(lhs)?, to_numeric(rhs)?) {
        (Numeric::Number(a), Numeric::Number(b)) => Ok(Value::Number(number_op(a, b))),
        (Numeric::BigInt(a), Numeric::BigInt(b)) => bigint_op(a, b)
            .map(Value::BigInt)
            .ok_or_else(|| RuntimeError::range_error("Maximum BigInt size exceeded")),
        _ => Err(RuntimeError::type_error(
            "Cannot mix BigInt and other types, use explicit conversions",
        )),
    }
}

fn is_reference(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Function(_))
}

/// `==` (IsLooselyEqual)
pub fn loose_equals(x: &Value, y: &Value) -> RuntimeResult<bool> {
    use Value::*;

    match (x, y) {
        (Undefined | Null, Undefined | Null) => Ok(true),
        (Undefined | Null, _) | (_, Undefined | Null) => Ok(false),

        (Number(_), Number(_))
        | (String(_), String(_))
        | (Boolean(_), Boolean(_))
        | (BigInt(_), BigInt(_))
        | (Symbol(_), Symbol(_)) => Ok(x.strict_equals(y)),
        _ if is_reference(x) && is_reference(y) => Ok(x.strict_equals(y)),

        (Number(n), String(s)) | (String(s), Number(n)) => Ok(*n == string_to_number(s)),
        (BigInt(b), String(s)) | (String(s), BigInt(b)) => Ok(string_to_bigint(s) == Some(*b)),

        (Boolean(b), _) => loose_equals(&Number(if *b { 1.0 } else { 0.0 }), y),
        (_, Boolean(b)) => loose_equals(x, &Number(if *b { 1.0 } else { 0.0 })),

        _ if is_reference(x) => loose_equals(&to_primitive(x, Hint::Default)?, y),
        _ if is_reference(y) => loose_equals(x, &to_primitive(y, Hint::Default)?),

        (BigInt(b), Number(n)) | (Number(n), BigInt(b)) => Ok(bigint_equals_number(*b, *n)),

        _ => Ok(false),
    }
}

/// Exact comparison of a BigInt with a Number; no rounding through f64
fn bigint_equals_number(b: i128, n: f64) -> bool {
    // i128 covers [-2^127, 2^127)
    let limit = 2f64.powi(127);
    n.is_finite() && n.fract() == 0.0 && n >= -limit && n < limit && n as i128 == b
}
