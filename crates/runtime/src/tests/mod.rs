// Runtime Test Modules

mod error_tests;
mod property_tests;

use crate::{eval_source, Value};

// Evaluate a fixture that is expected to succeed
pub(crate) fn value(source: &str) -> Value {
    eval_source(source).unwrap_or_else(|e| panic!("fixture {:?} failed: {:?}", source, e))
}

pub(crate) fn values(sources: &[&str]) -> Vec<Value> {
    sources.iter().map(|s| value(s)).collect()
}
