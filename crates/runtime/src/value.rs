// Runtime value model
//
// Values produced by evaluating fixtures. Objects, functions and symbols are
// reference types: cloning a `Value` shares the allocation, and strict
// equality compares those variants by identity.

use std::fmt;
use std::rc::Rc;

use crate::coerce::number_to_string;

#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(Rc<Symbol>),
    Object(Rc<Object>),
    Function(Rc<Function>),
}

#[derive(Debug)]
pub struct Symbol {
    pub description: Option<String>,
}

/// Object kinds the classifier can tell apart
#[derive(Debug)]
pub enum Object {
    Plain(Vec<(String, Value)>),
    Array(Vec<Value>),
    /// Milliseconds since the Unix epoch, NaN for an invalid date
    Date(f64),
    RegExp {
        source: String,
        flags: String,
    },
    Set(Vec<Value>),
    Map(Vec<(Value, Value)>),
    Error {
        name: String,
        message: String,
    },
    /// Fixed-size binary buffer; only the byte length is tracked
    ArrayBuffer(usize),
    Blob {
        size: usize,
        mime: String,
    },
    /// Wrapper object around a primitive (`new String("x")`)
    Boxed(Value),
    /// Built-ins with no category of their own (WeakMap, WeakSet)
    Opaque(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Normal,
    Arrow,
    Generator,
    Async,
    AsyncArrow,
    AsyncGenerator,
    Class,
    /// Global built-in such as `Date` or `Symbol`
    Native,
}

#[derive(Debug)]
pub struct Function {
    pub name: String,
    pub kind: FunctionKind,
    pub params: Vec<String>,
}

impl Function {
    pub fn native(name: &str) -> Self {
        Function {
            name: name.to_string(),
            kind: FunctionKind::Native,
            params: Vec::new(),
        }
    }

    /// Name of the intrinsic constructor that created this function
    pub fn constructor_name(&self) -> &'static str {
        match self.kind {
            FunctionKind::Generator => "GeneratorFunction",
            FunctionKind::Async | FunctionKind::AsyncArrow => "AsyncFunction",
            FunctionKind::AsyncGenerator => "AsyncGeneratorFunction",
            FunctionKind::Normal
            | FunctionKind::Arrow
            | FunctionKind::Class
            | FunctionKind::Native => "Function",
        }
    }

    /// Canonical source text; bodies are not retained
    pub fn source_text(&self) -> String {
        let params = self.params.join(", ");
        match self.kind {
            FunctionKind::Native => format!("function {}() {{ [native code] }}", self.name),
            FunctionKind::Class => format!("class {} {{ }}", self.name),
            FunctionKind::Arrow => format!("({}) => {{ }}", params),
            FunctionKind::AsyncArrow => format!("async ({}) => {{ }}", params),
            FunctionKind::Normal => format!("function {}({}) {{ }}", self.name, params),
            FunctionKind::Generator => format!("function* {}({}) {{ }}", self.name, params),
            FunctionKind::Async => format!("async function {}({}) {{ }}", self.name, params),
            FunctionKind::AsyncGenerator => {
                format!("async function* {}({}) {{ }}", self.name, params)
            }
        }
    }
}

impl Object {
    /// Tag used by `Object.prototype.toString`, e.g. `[object Set]`
    pub fn class_name(&self) -> &str {
        match self {
            Object::Plain(_) => "Object",
            Object::Array(_) => "Array",
            Object::Date(_) => "Date",
            Object::RegExp { .. } => "RegExp",
            Object::Set(_) => "Set",
            Object::Map(_) => "Map",
            Object::Error { .. } => "Error",
            Object::ArrayBuffer(_) => "ArrayBuffer",
            Object::Blob { .. } => "Blob",
            Object::Boxed(inner) => match inner {
                Value::String(_) => "String",
                Value::Number(_) => "Number",
                Value::Boolean(_) => "Boolean",
                Value::BigInt(_) => "BigInt",
                Value::Symbol(_) => "Symbol",
                _ => "Object",
            },
            Object::Opaque(name) => name,
        }
    }
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    pub fn symbol(description: Option<String>) -> Self {
        Value::Symbol(Rc::new(Symbol { description }))
    }

    pub fn object(object: Object) -> Self {
        Value::Object(Rc::new(object))
    }

    pub fn array(items: Vec<Value>) -> Self {
        Value::object(Object::Array(items))
    }

    pub fn function(function: Function) -> Self {
        Value::Function(Rc::new(function))
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Elements of an array value; `None` for anything else
    pub fn as_array(&self) -> Option<&[Value]> {
        match self.as_object() {
            Some(Object::Array(items)) => Some(items),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(function) => Some(function),
            _ => None,
        }
    }

    /// `===`: no coercion, NaN is unequal to itself, references compare by identity
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            // Built-ins are singletons, so two references to `Date` are the same function
            (Value::Function(a), Value::Function(b)) => {
                Rc::ptr_eq(a, b)
                    || (a.kind == FunctionKind::Native
                        && b.kind == FunctionKind::Native
                        && a.name == b.name)
            }
            _ => false,
        }
    }

    /// SameValueZero, the key equality of Set and Map
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => (a.is_nan() && b.is_nan()) || a == b,
            _ => self.strict_equals(other),
        }
    }
}

fn write_list<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a Value>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Plain(props) => {
                if props.is_empty() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{ ")?;
                for (i, (key, value)) in props.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, " }}")
            }
            Object::Array(items) => {
                write!(f, "[")?;
                write_list(f, items.iter())?;
                write!(f, "]")
            }
            Object::Date(time) => match crate::coerce::date_to_iso_string(*time) {
                Some(iso) => write!(f, "Date({})", iso),
                None => write!(f, "Invalid Date"),
            },
            Object::RegExp { source, flags } => write!(f, "/{}/{}", source, flags),
            Object::Set(items) => {
                write!(f, "Set({}) {{", items.len())?;
                write_list(f, items.iter())?;
                write!(f, "}}")
            }
            Object::Map(entries) => {
                write!(f, "Map({}) {{", entries.len())?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} => {}", key, value)?;
                }
                write!(f, "}}")
            }
            Object::Error { name, message } if message.is_empty() => write!(f, "{}", name),
            Object::Error { name, message } => write!(f, "{}: {}", name, message),
            Object::ArrayBuffer(len) => write!(f, "ArrayBuffer {{ byteLength: {} }}", len),
            Object::Blob { size, mime } => write!(f, "Blob {{ size: {}, type: {:?} }}", size, mime),
            Object::Boxed(inner) => write!(f, "[{}: {}]", self.class_name(), inner),
            Object::Opaque(name) => write!(f, "{} {{}}", name),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            FunctionKind::Class => "class",
            FunctionKind::Generator => "GeneratorFunction",
            FunctionKind::Async | FunctionKind::AsyncArrow => "AsyncFunction",
            FunctionKind::AsyncGenerator => "AsyncGeneratorFunction",
            _ => "Function",
        };
        match (self.kind, self.name.is_empty()) {
            (FunctionKind::Class, true) => write!(f, "[class (anonymous)]"),
            (FunctionKind::Class, false) => write!(f, "[class {}]", self.name),
            (_, true) => write!(f, "[{} (anonymous)]", label),
            (_, false) => write!(f, "[{}: {}]", label, self.name),
        }
    }
}

// Console-style rendering used in check output
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", number_to_string(*n)),
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Symbol(sym) => match &sym.description {
                Some(desc) => write!(f, "Symbol({})", desc),
                None => write!(f, "Symbol()"),
            },
            Value::Object(object) => write!(f, "{}", object),
            Value::Function(function) => write!(f, "{}", function),
        }
    }
}
