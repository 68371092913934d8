// Error handling for fixture evaluation
//
// Evaluation errors mirror the exceptions a JavaScript engine would throw.
// They are created without a span deep inside conversions and get the span of
// the failing expression attached on the way out of the evaluator.

use parser::error::ParseError;
use thiserror::Error;

// Import Span type from parser AST
pub use parser::ast::Span;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Operation applied to a value of the wrong type
    #[error("TypeError: {message}")]
    TypeError { message: String, span: Option<Span> },

    /// Identifier that is not a known global
    #[error("ReferenceError: {name} is not defined")]
    ReferenceError { name: String, span: Option<Span> },

    /// Numeric argument out of range (lengths, BigInt division)
    #[error("RangeError: {message}")]
    RangeError { message: String, span: Option<Span> },

    /// Malformed text handed to a constructor (RegExp flags, BigInt strings)
    #[error("SyntaxError: {message}")]
    SyntaxError { message: String, span: Option<Span> },

    /// Valid source the evaluator does not execute, such as calling a user function
    #[error("Unsupported: {what}")]
    Unsupported { what: String, span: Option<Span> },
}

impl RuntimeError {
    pub fn type_error(message: impl Into<String>) -> Self {
        RuntimeError::TypeError {
            message: message.into(),
            span: None,
        }
    }

    pub fn reference_error(name: impl Into<String>) -> Self {
        RuntimeError::ReferenceError {
            name: name.into(),
            span: None,
        }
    }

    pub fn range_error(message: impl Into<String>) -> Self {
        RuntimeError::RangeError {
            message: message.into(),
            span: None,
        }
    }

    pub fn syntax_error(message: impl Into<String>) -> Self {
        RuntimeError::SyntaxError {
            message: message.into(),
            span: None,
        }
    }

    pub fn unsupported(what: impl Into<String>) -> Self {
        RuntimeError::Unsupported {
            what: what.into(),
            span: None,
        }
    }

    pub fn span(&self) -> Option<&Span> {
        match self {
            RuntimeError::TypeError { span, .. }
            | RuntimeError::ReferenceError { span, .. }
            | RuntimeError::RangeError { span, .. }
            | RuntimeError::SyntaxError { span, .. }
            | RuntimeError::Unsupported { span, .. } => span.as_ref(),
        }
    }

    /// Attach `at` unless a more precise span is already present
    pub fn with_span(mut self, at: Span) -> Self {
        match &mut self {
            RuntimeError::TypeError { span, .. }
            | RuntimeError::ReferenceError { span, .. }
            | RuntimeError::RangeError { span, .. }
            | RuntimeError::SyntaxError { span, .. }
            | RuntimeError::Unsupported { span, .. } => {
                if span.is_none() {
                    *span = Some(at);
                }
            }
        }
        self
    }

    /// Diagnostic code shown in reports
    pub fn code(&self) -> &'static str {
        match self {
            RuntimeError::TypeError { .. } => "E101",
            RuntimeError::ReferenceError { .. } => "E102",
            RuntimeError::RangeError { .. } => "E103",
            RuntimeError::SyntaxError { .. } => "E104",
            RuntimeError::Unsupported { .. } => "E105",
        }
    }
}

/// Convenient Result type for evaluation
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Anything that can go wrong turning fixture text into a value
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture failed to parse ({} error(s))", .0.len())]
    Parse(Vec<ParseError>),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
