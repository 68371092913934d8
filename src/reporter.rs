// Assertion reporter
//
// Runs checks one after another and logs a pass or fail line for each. The
// current group is a field of the reporter, so two reporters never share
// output state. A failed check is recorded and the run moves on.

use log::{debug, error, info, trace};
use runtime::{RealType, TypeTag, Value};

use crate::equality::StructuralEq;

/// Console-style rendering of checked values
pub trait Inspect {
    fn inspect(&self) -> String;
}

impl Inspect for bool {
    fn inspect(&self) -> String {
        self.to_string()
    }
}

impl Inspect for usize {
    fn inspect(&self) -> String {
        self.to_string()
    }
}

impl Inspect for str {
    fn inspect(&self) -> String {
        format!("{:?}", self)
    }
}

impl Inspect for String {
    fn inspect(&self) -> String {
        self.as_str().inspect()
    }
}

impl Inspect for TypeTag {
    fn inspect(&self) -> String {
        format!("{:?}", self.as_str())
    }
}

impl Inspect for RealType {
    fn inspect(&self) -> String {
        format!("{:?}", self.as_str())
    }
}

impl Inspect for Value {
    fn inspect(&self) -> String {
        self.to_string()
    }
}

impl<T: Inspect> Inspect for [T] {
    fn inspect(&self) -> String {
        let items: Vec<String> = self.iter().map(Inspect::inspect).collect();
        format!("[{}]", items.join(", "))
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn inspect(&self) -> String {
        self.as_slice().inspect()
    }
}

impl<A: Inspect, B: Inspect> Inspect for (A, B) {
    fn inspect(&self) -> String {
        format!("[{}, {}]", self.0.inspect(), self.1.inspect())
    }
}

/// Totals returned by `Reporter::finish`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    /// "group > label" for every failed check, in order
    pub failures: Vec<String>,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

pub struct Reporter {
    group: Option<String>,
    passed: usize,
    failed: usize,
    failures: Vec<String>,
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter {
            group: None,
            passed: 0,
            failed: 0,
            failures: Vec::new(),
            color,
        }
    }

    /// Close the open group, if any, and open `name`
    pub fn start_group(&mut self, name: &str) {
        self.end_group();
        info!("{}", name);
        self.group = Some(name.to_string());
    }

    fn end_group(&mut self) {
        if let Some(name) = self.group.take() {
            debug!("end of {}", name);
        }
    }

    /// Compare `actual` with `expected` and log the outcome
    pub fn check<T>(&mut self, label: &str, actual: &T, expected: &T) -> bool
    where
        T: StructuralEq + Inspect + ?Sized,
    {
        if actual.structurally_eq(expected) {
            info!("  ✓ {}", label);
            self.passed += 1;
            true
        } else {
            error!(
                "  ✗ {}: expected {}, got {}",
                label,
                expected.inspect(),
                actual.inspect()
            );
            self.record_failure(label);
            false
        }
    }

    /// Evaluate a fixture. Failures are rendered, counted as a failed check
    /// and reported as `None`.
    pub fn fixture(&mut self, source: &str) -> Option<Value> {
        match runtime::eval_source(source) {
            Ok(value) => {
                trace!("  {} => {}", source, value);
                Some(value)
            }
            Err(e) => {
                error!("  ✗ fixture {} could not be evaluated", source);
                error!("{}", e.render("fixture", source, self.color));
                self.record_failure(&format!("fixture {}", source));
                None
            }
        }
    }

    /// Evaluate a list of fixtures, stopping at the first that fails
    pub fn fixtures(&mut self, sources: &[&str]) -> Option<Vec<Value>> {
        sources.iter().map(|source| self.fixture(source)).collect()
    }

    fn record_failure(&mut self, label: &str) {
        self.failed += 1;
        let entry = match &self.group {
            Some(group) => format!("{} > {}", group, label),
            None => label.to_string(),
        };
        self.failures.push(entry);
    }

    /// Close the open group and return the totals
    pub fn finish(mut self) -> Summary {
        self.end_group();
        Summary {
            passed: self.passed,
            failed: self.failed,
            failures: self.failures,
        }
    }
}
