// Type classification
//
// `coarse_type` is what the `typeof` operator reports. `real_type` refines it
// with structural checks so arrays, dates, NaN, null and friends get their own
// label instead of collapsing into "object" or "number".

use std::cmp::Ordering;
use std::fmt;

use crate::value::{Object, Value};

/// Coarse runtime type tag, as returned by `typeof`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
    Undefined,
    Object,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Function,
}

impl TypeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::Object => "object",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::BigInt => "bigint",
            TypeTag::String => "string",
            TypeTag::Symbol => "symbol",
            TypeTag::Function => "function",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Refined type tag.
///
/// Ordering follows the label text byte-wise, so uppercase labels (`Infinity`,
/// `NaN`) sort before lowercase ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RealType {
    Array,
    Date,
    RegExp,
    Set,
    Map,
    Error,
    Buffer,
    Blob,
    NaN,
    Null,
    Infinity,
    GeneratorFunction,
    /// No refinement applies; the coarse tag stands
    Coarse(TypeTag),
}

impl RealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RealType::Array => "array",
            RealType::Date => "date",
            RealType::RegExp => "regexp",
            RealType::Set => "set",
            RealType::Map => "map",
            RealType::Error => "error",
            RealType::Buffer => "buffer",
            RealType::Blob => "blob",
            RealType::NaN => "NaN",
            RealType::Null => "null",
            RealType::Infinity => "Infinity",
            RealType::GeneratorFunction => "generator function",
            RealType::Coarse(tag) => tag.as_str(),
        }
    }

    /// The coarse tag every value with this real type carries
    pub fn coarse_type(&self) -> TypeTag {
        match self {
            RealType::Array
            | RealType::Date
            | RealType::RegExp
            | RealType::Set
            | RealType::Map
            | RealType::Error
            | RealType::Buffer
            | RealType::Blob
            | RealType::Null => TypeTag::Object,
            RealType::NaN | RealType::Infinity => TypeTag::Number,
            RealType::GeneratorFunction => TypeTag::Function,
            RealType::Coarse(tag) => *tag,
        }
    }
}

impl Ord for RealType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for RealType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn coarse_type(value: &Value) -> TypeTag {
    match value {
        Value::Undefined => TypeTag::Undefined,
        Value::Null | Value::Object(_) => TypeTag::Object,
        Value::Boolean(_) => TypeTag::Boolean,
        Value::Number(_) => TypeTag::Number,
        Value::BigInt(_) => TypeTag::BigInt,
        Value::String(_) => TypeTag::String,
        Value::Symbol(_) => TypeTag::Symbol,
        Value::Function(_) => TypeTag::Function,
    }
}

/// Refined type of `value`. Checks run in a fixed order and the first match
/// wins; values no check recognises fall back to their coarse tag.
pub fn real_type(value: &Value) -> RealType {
    let object = value.as_object();
    let checks: [(fn(&Value, Option<&Object>) -> bool, RealType); 12] = [
        (|_, o| matches!(o, Some(Object::Array(_))), RealType::Array),
        (|_, o| matches!(o, Some(Object::Date(_))), RealType::Date),
        (|_, o| matches!(o, Some(Object::RegExp { .. })), RealType::RegExp),
        (|_, o| matches!(o, Some(Object::Set(_))), RealType::Set),
        (|_, o| matches!(o, Some(Object::Map(_))), RealType::Map),
        (|_, o| matches!(o, Some(Object::Error { .. })), RealType::Error),
        (|_, o| matches!(o, Some(Object::ArrayBuffer(_))), RealType::Buffer),
        (|_, o| matches!(o, Some(Object::Blob { .. })), RealType::Blob),
        (|v, _| matches!(v, Value::Number(n) if n.is_nan()), RealType::NaN),
        (|v, _| matches!(v, Value::Null), RealType::Null),
        (|v, _| matches!(v, Value::Number(n) if *n == f64::INFINITY), RealType::Infinity),
        (
            |v, _| {
                v.as_function()
                    .is_some_and(|f| f.constructor_name() == "GeneratorFunction")
            },
            RealType::GeneratorFunction,
        ),
    ];

    checks
        .iter()
        .find(|(check, _)| check(value, object))
        .map(|(_, real)| *real)
        .unwrap_or_else(|| RealType::Coarse(coarse_type(value)))
}

/// Coarse tag of every element, in order
pub fn types_of(values: &[Value]) -> Vec<TypeTag> {
    values.iter().map(coarse_type).collect()
}

/// Real type of every element, in order
pub fn real_types_of(values: &[Value]) -> Vec<RealType> {
    values.iter().map(real_type).collect()
}
