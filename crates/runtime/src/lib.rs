// Runtime for fixture values
//
// Evaluates fixture expressions into dynamically typed values and classifies
// them by coarse and refined type.

// --- MODULE DECLARATIONS ---
mod analyze;
mod builtins;
mod classify;
mod coerce;
mod error;
mod error_report;
mod eval;
mod operators;
mod value;

pub use analyze::{all_same_type, all_unique_real_type, count_real_types};
pub use classify::{RealType, TypeTag, coarse_type, real_type, real_types_of, types_of};
pub use error::{FixtureError, RuntimeError, RuntimeResult, Span};
pub use error_report::render_runtime_error;
pub use eval::{eval_source, evaluate};
pub use value::{Function, FunctionKind, Object, Symbol, Value};

#[cfg(test)]
mod tests;
