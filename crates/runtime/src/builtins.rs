// Built-in globals
//
// The constructors and conversion functions fixtures may reference. Each
// built-in can be called, constructed with `new`, or both, following
// JavaScript's rules for which form is allowed.

use chrono::Utc;

use crate::coerce::{
    make_date, parse_date, string_to_bigint, time_clip, to_boolean, to_number, to_primitive,
    to_string, Hint,
};
use crate::error::{RuntimeError, RuntimeResult};
use crate::value::{Function, Object, Value};

/// Largest `Array(n)` the evaluator will materialise
pub const MAX_DENSE_ARRAY_LENGTH: usize = 1 << 20;

/// Largest `ArrayBuffer` length accepted (2^53 - 1)
pub const MAX_BUFFER_LENGTH: f64 = 9_007_199_254_740_991.0;

const ERROR_CONSTRUCTORS: &[&str] = &[
    "Error",
    "TypeError",
    "RangeError",
    "SyntaxError",
    "ReferenceError",
    "EvalError",
    "URIError",
];

const GLOBAL_FUNCTIONS: &[&str] = &[
    "Symbol",
    "BigInt",
    "String",
    "Number",
    "Boolean",
    "Array",
    "Object",
    "RegExp",
    "Date",
    "Set",
    "Map",
    "WeakMap",
    "WeakSet",
    "ArrayBuffer",
    "Blob",
];

pub fn is_builtin(name: &str) -> bool {
    GLOBAL_FUNCTIONS.contains(&name) || ERROR_CONSTRUCTORS.contains(&name)
}

/// Value of a global identifier, `None` when it is not defined
pub fn resolve_global(name: &str) -> Option<Value> {
    match name {
        "undefined" => Some(Value::Undefined),
        "NaN" => Some(Value::Number(f64::NAN)),
        "Infinity" => Some(Value::Number(f64::INFINITY)),
        _ if is_builtin(name) => Some(Value::function(Function::native(name))),
        _ => None,
    }
}

fn arg(args: &[Value], index: usize) -> &Value {
    args.get(index).unwrap_or(&Value::Undefined)
}

/// Call a built-in as a plain function: `Symbol("x")`, `Number("1")`
pub fn call(name: &str, args: Vec<Value>) -> RuntimeResult<Value> {
    match name {
        "Symbol" => {
            let description = match arg(&args, 0) {
                Value::Undefined => None,
                other => Some(to_string(other)?),
            };
            Ok(Value::symbol(description))
        }
        "BigInt" => to_bigint(arg(&args, 0)).map(Value::BigInt),
        "String" => match arg(&args, 0) {
            _ if args.is_empty() => Ok(Value::string("")),
            // String(symbol) is allowed even though implicit conversion is not
            Value::Symbol(sym) => Ok(Value::String(format!(
                "Symbol({})",
                sym.description.as_deref().unwrap_or("")
            ))),
            other => to_string(other).map(Value::String),
        },
        "Number" => match arg(&args, 0) {
            _ if args.is_empty() => Ok(Value::Number(0.0)),
            Value::BigInt(n) => Ok(Value::Number(*n as f64)),
            other => to_number(other).map(Value::Number),
        },
        "Boolean" => Ok(Value::Boolean(to_boolean(arg(&args, 0)))),
        "Array" | "Object" | "RegExp" => construct(name, args),
        _ if ERROR_CONSTRUCTORS.contains(&name) => construct(name, args),
        // Date() ignores its arguments and returns the current time as a string
        "Date" => Ok(Value::String(crate::coerce::date_to_string(now()))),
        "Set" | "Map" | "WeakMap" | "WeakSet" | "ArrayBuffer" | "Blob" => Err(
            RuntimeError::type_error(format!("Constructor {} requires 'new'", name)),
        ),
        _ => Err(RuntimeError::reference_error(name)),
    }
}

/// Construct a built-in with `new`
pub fn construct(name: &str, args: Vec<Value>) -> RuntimeResult<Value> {
    log::trace!("new {} with {} argument(s)", name, args.len());

    let object = match name {
        "Date" => Object::Date(construct_date(&args)?),
        "RegExp" => construct_regexp(&args)?,
        "Set" => Object::Set(construct_set(arg(&args, 0))?),
        "Map" => Object::Map(construct_map(arg(&args, 0))?),
        "ArrayBuffer" => Object::ArrayBuffer(buffer_length(arg(&args, 0))?),
        "Blob" => construct_blob(arg(&args, 0), arg(&args, 1))?,
        "String" => Object::Boxed(call("String", args)?),
        "Number" => Object::Boxed(call("Number", args)?),
        "Boolean" => Object::Boxed(Value::Boolean(to_boolean(arg(&args, 0)))),
        "Object" => return Ok(to_object(arg(&args, 0))),
        "Array" => construct_array(args)?,
        "WeakMap" | "WeakSet" => Object::Opaque(name.to_string()),
        _ if ERROR_CONSTRUCTORS.contains(&name) => {
            let message = match arg(&args, 0) {
                Value::Undefined => String::new(),
                other => to_string(other)?,
            };
            Object::Error {
                name: name.to_string(),
                message,
            }
        }
        "Symbol" | "BigInt" => {
            return Err(RuntimeError::type_error(format!("{} is not a constructor", name)));
        }
        _ => return Err(RuntimeError::reference_error(name)),
    };
    Ok(Value::object(object))
}

fn now() -> f64 {
    Utc::now().timestamp_millis() as f64
}

fn to_bigint(value: &Value) -> RuntimeResult<i128> {
    match to_primitive(value, Hint::Number)? {
        Value::BigInt(n) => Ok(n),
        Value::Boolean(b) => Ok(i128::from(b)),
        Value::Number(n) => {
            if n.is_finite() && n.fract() == 0.0 && n.abs() < 1.7e38 {
                Ok(n as i128)
            } else {
                Err(RuntimeError::range_error(format!(
                    "The number {} cannot be converted to a BigInt because it is not an integer",
                    crate::coerce::number_to_string(n)
                )))
            }
        }
        Value::String(s) => string_to_bigint(&s)
            .ok_or_else(|| RuntimeError::syntax_error(format!("Cannot convert {} to a BigInt", s))),
        other => Err(RuntimeError::type_error(format!(
            "Cannot convert {} to a BigInt",
            other
        ))),
    }
}

/// Object(value): objects pass through, primitives are boxed
fn to_object(value: &Value) -> Value {
    match value {
        Value::Undefined | Value::Null => Value::object(Object::Plain(Vec::new())),
        Value::Object(_) | Value::Function(_) => value.clone(),
        primitive => Value::object(Object::Boxed(primitive.clone())),
    }
}

fn construct_date(args: &[Value]) -> RuntimeResult<f64> {
    match args {
        [] => Ok(now()),
        [single] => {
            if let Some(Object::Date(time)) = single.as_object() {
                return Ok(*time);
            }
            match to_primitive(single, Hint::Default)? {
                Value::String(s) => Ok(parse_date(&s)),
                other => Ok(time_clip(to_number(&other)?)),
            }
        }
        parts => {
            let numbers = parts
                .iter()
                .take(7)
                .map(to_number)
                .collect::<RuntimeResult<Vec<_>>>()?;
            Ok(make_date(&numbers))
        }
    }
}

fn construct_regexp(args: &[Value]) -> RuntimeResult<Object> {
    let (source, inherited_flags) = match arg(args, 0) {
        Value::Object(object) => match &**object {
            Object::RegExp { source, flags } => (source.clone(), Some(flags.clone())),
            _ => (to_string(arg(args, 0))?, None),
        },
        Value::Undefined => ("(?:)".to_string(), None),
        other => (to_string(other)?, None),
    };

    let flags = match arg(args, 1) {
        Value::Undefined => inherited_flags.unwrap_or_default(),
        other => to_string(other)?,
    };

    let mut seen = String::new();
    for flag in flags.chars() {
        if !"dgimsuvy".contains(flag) || seen.contains(flag) {
            return Err(RuntimeError::syntax_error(format!(
                "Invalid flags supplied to RegExp constructor '{}'",
                flags
            )));
        }
        seen.push(flag);
    }

    let source = if source.is_empty() {
        "(?:)".to_string()
    } else {
        source
    };
    Ok(Object::RegExp { source, flags })
}

/// Elements produced by iterating `value` for Set/Map construction
fn iterate(value: &Value) -> RuntimeResult<Vec<Value>> {
    match value {
        Value::String(s) => Ok(s.chars().map(|c| Value::String(c.to_string())).collect()),
        Value::Object(object) => match &**object {
            Object::Array(items) | Object::Set(items) => Ok(items.clone()),
            Object::Map(entries) => Ok(entries
                .iter()
                .map(|(k, v)| Value::array(vec![k.clone(), v.clone()]))
                .collect()),
            _ => Err(RuntimeError::type_error(format!("{} is not iterable", value))),
        },
        _ => Err(RuntimeError::type_error(format!("{} is not iterable", value))),
    }
}

fn construct_set(iterable: &Value) -> RuntimeResult<Vec<Value>> {
    if iterable.is_nullish() {
        return Ok(Vec::new());
    }

    let mut items: Vec<Value> = Vec::new();
    for item in iterate(iterable)? {
        if !items.iter().any(|existing| existing.same_value_zero(&item)) {
            items.push(item);
        }
    }
    Ok(items)
}

fn construct_map(iterable: &Value) -> RuntimeResult<Vec<(Value, Value)>> {
    if iterable.is_nullish() {
        return Ok(Vec::new());
    }

    let mut entries: Vec<(Value, Value)> = Vec::new();
    for entry in iterate(iterable)? {
        let (key, value) = match entry.as_object() {
            Some(Object::Array(pair)) => (arg(pair, 0).clone(), arg(pair, 1).clone()),
            Some(_) => (Value::Undefined, Value::Undefined),
            None => {
                return Err(RuntimeError::type_error(format!(
                    "Iterator value {} is not an entry object",
                    entry
                )));
            }
        };
        // Later entries overwrite the value but keep the original position
        match entries.iter_mut().find(|(k, _)| k.same_value_zero(&key)) {
            Some(existing) => existing.1 = value,
            None => entries.push((key, value)),
        }
    }
    Ok(entries)
}

fn buffer_length(value: &Value) -> RuntimeResult<usize> {
    let length = to_number(value)?;
    let length = if length.is_nan() { 0.0 } else { length.trunc() };
    if length < 0.0 || length > MAX_BUFFER_LENGTH {
        return Err(RuntimeError::range_error("Invalid array buffer length"));
    }
    Ok(length as usize)
}

fn construct_blob(parts: &Value, options: &Value) -> RuntimeResult<Object> {
    let parts = match parts {
        Value::Undefined => Vec::new(),
        other => match other.as_array() {
            Some(items) => items.to_vec(),
            None => {
                return Err(RuntimeError::type_error(
                    "Failed to construct 'Blob': The provided value cannot be converted to a sequence.",
                ));
            }
        },
    };

    let mut size: usize = 0;
    for part in &parts {
        let part_size = match part.as_object() {
            Some(Object::ArrayBuffer(len)) => *len,
            Some(Object::Blob { size, .. }) => *size,
            _ => to_string(part)?.len(),
        };
        size = size
            .checked_add(part_size)
            .ok_or_else(|| RuntimeError::range_error("Blob size exceeds the addressable range"))?;
    }

    let mime = match options.as_object() {
        Some(Object::Plain(props)) => match props.iter().find(|(key, _)| key == "type") {
            Some((_, value)) => to_string(value)?.to_ascii_lowercase(),
            None => String::new(),
        },
        _ => String::new(),
    };

    Ok(Object::Blob { size, mime })
}

fn construct_array(args: Vec<Value>) -> RuntimeResult<Object> {
    if let [Value::Number(n)] = args.as_slice() {
        let n = *n;
        if n < 0.0 || n.fract() != 0.0 || n > f64::from(u32::MAX) {
            return Err(RuntimeError::range_error("Invalid array length"));
        }
        if n as usize > MAX_DENSE_ARRAY_LENGTH {
            return Err(RuntimeError::range_error(format!(
                "Array length {} exceeds the evaluator limit of {}",
                n, MAX_DENSE_ARRAY_LENGTH
            )));
        }
        return Ok(Object::Array(vec![Value::Undefined; n as usize]));
    }
    Ok(Object::Array(args))
}
