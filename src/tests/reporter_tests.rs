// Reporter Tests

use crate::reporter::{Inspect, Reporter, Summary};
use pretty_assertions::assert_eq;
use runtime::{RealType, TypeTag};

// ==================== CHECK TESTS ====================

#[test]
fn test_check_counts_passes_and_failures() {
    let mut reporter = Reporter::new(false);
    reporter.start_group("numbers");
    assert!(reporter.check("same", &1usize, &1));
    assert!(!reporter.check("different", &1usize, &2));
    assert!(reporter.check("lists", &vec![true, false], &vec![true, false]));

    assert_eq!(
        reporter.finish(),
        Summary {
            passed: 2,
            failed: 1,
            failures: vec!["numbers > different".to_string()],
        }
    );
}

#[test]
fn test_failure_outside_group() {
    let mut reporter = Reporter::new(false);
    reporter.check("lonely", &true, &false);
    assert_eq!(reporter.finish().failures, vec!["lonely".to_string()]);
}

#[test]
fn test_start_group_replaces_current_group() {
    let mut reporter = Reporter::new(false);
    reporter.start_group("first");
    reporter.start_group("second");
    reporter.check("x", &true, &false);
    assert_eq!(reporter.finish().failures, vec!["second > x".to_string()]);
}

// ==================== FIXTURE TESTS ====================

#[test]
fn test_fixture_success() {
    let mut reporter = Reporter::new(false);
    let value = reporter.fixture("[1, 2]");
    assert_eq!(value.and_then(|v| v.as_array().map(|a| a.len())), Some(2));
    assert!(reporter.finish().all_passed());
}

#[test]
fn test_fixture_failure_counts_once() {
    let mut reporter = Reporter::new(false);
    reporter.start_group("broken");
    assert!(reporter.fixture("new Nope()").is_none());
    assert!(reporter.fixtures(&["1", "1 +", "2"]).is_none());

    let summary = reporter.finish();
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.passed, 0);
    assert_eq!(summary.failures[1], "broken > fixture 1 +");
}

#[test]
fn test_summary_total() {
    let summary = Summary {
        passed: 4,
        failed: 1,
        failures: vec!["x".to_string()],
    };
    assert_eq!(summary.total(), 5);
    assert!(!summary.all_passed());
}

// ==================== INSPECT TESTS ====================

#[test]
fn test_inspect_rendering() {
    assert_eq!(RealType::GeneratorFunction.inspect(), "\"generator function\"");
    assert_eq!(TypeTag::Object.inspect(), "\"object\"");
    assert_eq!(
        vec![(RealType::Coarse(TypeTag::Boolean), 3usize), (RealType::Null, 1)].inspect(),
        "[[\"boolean\", 3], [\"null\", 1]]"
    );
    assert_eq!(Vec::<bool>::new().inspect(), "[]");
}
