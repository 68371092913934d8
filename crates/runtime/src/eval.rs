// Expression evaluator
//
// Turns a parsed fixture into a runtime value. There are no bindings: the only
// identifiers are the globals from `builtins`, and function bodies are kept
// as descriptions rather than executed.

use parser::ast::{Expr, ExprKind, FunctionDef, Literal};

use crate::builtins;
use crate::error::{FixtureError, RuntimeError, RuntimeResult};
use crate::operators::{apply_binary, apply_unary};
use crate::value::{Function, FunctionKind, Object, Value};

/// Parse and evaluate one fixture expression
pub fn eval_source(source: &str) -> Result<Value, FixtureError> {
    let expr = parser::parse_source(source).map_err(FixtureError::Parse)?;
    Ok(evaluate(&expr)?)
}

pub fn evaluate(expr: &Expr) -> RuntimeResult<Value> {
    let span = expr.span.clone();

    let result = match &expr.kind {
        ExprKind::Literal(lit) => Ok(literal_value(lit)),

        ExprKind::Identifier(name) => {
            builtins::resolve_global(name).ok_or_else(|| RuntimeError::reference_error(name))
        }

        ExprKind::Array(items) => evaluate_list(items).map(Value::array),

        ExprKind::Object(props) => {
            let mut fields: Vec<(String, Value)> = Vec::with_capacity(props.len());
            for (key, value_expr) in props {
                let value = evaluate(value_expr)?;
                // Duplicate keys keep their first position and take the last value
                match fields.iter_mut().find(|(k, _)| k == key) {
                    Some(existing) => existing.1 = value,
                    None => fields.push((key.clone(), value)),
                }
            }
            Ok(Value::object(Object::Plain(fields)))
        }

        ExprKind::Unary { op, expr: operand } => apply_unary(*op, evaluate(operand)?),

        ExprKind::Binary { op, lhs, rhs } => {
            let lhs = evaluate(lhs)?;
            let rhs = evaluate(rhs)?;
            apply_binary(*op, &lhs, &rhs)
        }

        ExprKind::Call { callee, args } => {
            let callee = evaluate(callee)?;
            let args = evaluate_list(args)?;
            call_value(&callee, args)
        }

        ExprKind::New { constructor, args } => {
            if !builtins::is_builtin(constructor) {
                Err(RuntimeError::reference_error(constructor))
            } else {
                builtins::construct(constructor, evaluate_list(args)?)
            }
        }

        ExprKind::Function(def) => Ok(Value::function(function_value(def))),

        ExprKind::Class { name, extends } => class_value(name.as_deref(), extends.as_deref()),
    };

    result.map_err(|e| e.with_span(span))
}

fn evaluate_list(exprs: &[Expr]) -> RuntimeResult<Vec<Value>> {
    exprs.iter().map(evaluate).collect()
}

fn literal_value(lit: &Literal) -> Value {
    match lit {
        Literal::Number(n) => Value::Number(*n),
        Literal::BigInt(n) => Value::BigInt(*n),
        Literal::String(s) => Value::String(s.clone()),
        Literal::Bool(b) => Value::Boolean(*b),
        Literal::Null => Value::Null,
    }
}

fn function_value(def: &FunctionDef) -> Function {
    let kind = match (def.is_arrow, def.is_async, def.is_generator) {
        (true, true, _) => FunctionKind::AsyncArrow,
        (true, false, _) => FunctionKind::Arrow,
        (false, true, true) => FunctionKind::AsyncGenerator,
        (false, true, false) => FunctionKind::Async,
        (false, false, true) => FunctionKind::Generator,
        (false, false, false) => FunctionKind::Normal,
    };
    Function {
        name: def.name.clone().unwrap_or_default(),
        kind,
        params: def.params.clone(),
    }
}

/// A class value. The superclass must resolve to a constructor, as `extends`
/// is evaluated when the class is defined.
fn class_value(name: Option<&str>, extends: Option<&str>) -> RuntimeResult<Value> {
    if let Some(parent) = extends {
        let parent_value =
            builtins::resolve_global(parent).ok_or_else(|| RuntimeError::reference_error(parent))?;
        if !builtins::is_builtin(parent) {
            return Err(RuntimeError::type_error(format!(
                "Class extends value {} is not a constructor or null",
                parent_value
            )));
        }
    }

    Ok(Value::function(Function {
        name: name.unwrap_or_default().to_string(),
        kind: FunctionKind::Class,
        params: Vec::new(),
    }))
}

fn call_value(callee: &Value, args: Vec<Value>) -> RuntimeResult<Value> {
    match callee.as_function() {
        Some(function) if function.kind == FunctionKind::Native => {
            builtins::call(&function.name, args)
        }
        Some(function) if function.kind == FunctionKind::Class => Err(RuntimeError::type_error(
            format!("Class constructor {} cannot be invoked without 'new'", function.name),
        )),
        Some(function) => Err(RuntimeError::unsupported(format!(
            "calling user-defined function {}",
            function
        ))),
        None => Err(RuntimeError::type_error(format!("{} is not a function", callee))),
    }
}
