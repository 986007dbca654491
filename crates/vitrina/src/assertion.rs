//! Assertions for scenario validation: hard helpers plus a soft-assertion
//! collector.
//!
//! Hard failures abort the rest of a scenario immediately; soft failures
//! are collected so one scenario run can surface several independent
//! defects, and are flushed together at scenario end via
//! [`SoftAssert::assert_all`]. Only the scenario layer asserts; neither
//! page objects nor composite workflows ever decide pass/fail.

use std::fmt::Debug;

use crate::result::{VitrinaError, VitrinaResult};

/// Result of an assertion
#[derive(Debug, Clone)]
pub struct AssertionResult {
    /// Whether the assertion passed
    pub passed: bool,
    /// Human-readable message
    pub message: String,
}

impl AssertionResult {
    /// Create a passing assertion result
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            passed: true,
            message: String::new(),
        }
    }

    /// Create a failing assertion result
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }
}

/// Assertion helpers
pub struct Assertion;

impl Assertion {
    /// Assert two values are equal
    #[must_use]
    pub fn equals<T: PartialEq + Debug>(actual: &T, expected: &T, message: &str) -> AssertionResult {
        if actual == expected {
            AssertionResult::pass()
        } else {
            AssertionResult::fail(format!("{message}: expected {expected:?}, got {actual:?}"))
        }
    }

    /// Assert a string contains a substring
    #[must_use]
    pub fn contains(haystack: &str, needle: &str, message: &str) -> AssertionResult {
        if haystack.contains(needle) {
            AssertionResult::pass()
        } else {
            AssertionResult::fail(format!(
                "{message}: expected '{haystack}' to contain '{needle}'"
            ))
        }
    }

    /// Assert a condition is true
    #[must_use]
    pub fn is_true(condition: bool, message: &str) -> AssertionResult {
        if condition {
            AssertionResult::pass()
        } else {
            AssertionResult::fail(message)
        }
    }

    /// Assert two floats are approximately equal
    #[must_use]
    pub fn approx_eq(actual: f64, expected: f64, epsilon: f64, message: &str) -> AssertionResult {
        if (actual - expected).abs() < epsilon {
            AssertionResult::pass()
        } else {
            AssertionResult::fail(format!("{message}: expected {expected}, got {actual}"))
        }
    }

    /// Assert a collection has the expected length
    #[must_use]
    pub fn has_length<T>(collection: &[T], expected: usize, message: &str) -> AssertionResult {
        if collection.len() == expected {
            AssertionResult::pass()
        } else {
            AssertionResult::fail(format!(
                "{message}: expected length {expected}, got {}",
                collection.len()
            ))
        }
    }
}

/// Failure collector for soft assertions.
///
/// Checks record failures without aborting; [`SoftAssert::assert_all`]
/// flushes every accumulated failure as one `AssertionFailed` error. A
/// dropped collector with unflushed failures is a scenario bug, so no
/// failure is ever silently discarded at flush time.
#[derive(Debug, Default)]
pub struct SoftAssert {
    failures: Vec<String>,
}

impl SoftAssert {
    /// Create an empty collector
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an assertion result, keeping failures for the final flush
    pub fn check(&mut self, result: AssertionResult) {
        if !result.passed {
            self.failures.push(result.message);
        }
    }

    /// Soft-check equality
    pub fn check_eq<T: PartialEq + Debug>(&mut self, actual: &T, expected: &T, message: &str) {
        self.check(Assertion::equals(actual, expected, message));
    }

    /// Soft-check a condition
    pub fn check_true(&mut self, condition: bool, message: &str) {
        self.check(Assertion::is_true(condition, message));
    }

    /// Soft-check approximate float equality
    pub fn check_approx(&mut self, actual: f64, expected: f64, message: &str) {
        self.check(Assertion::approx_eq(actual, expected, 1e-9, message));
    }

    /// Record an unconditional failure
    pub fn fail(&mut self, message: impl Into<String>) {
        self.failures.push(message.into());
    }

    /// Number of collected failures so far
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Flush all collected failures; `Err` aggregates every message when
    /// any check failed
    pub fn assert_all(&mut self) -> VitrinaResult<()> {
        if self.failures.is_empty() {
            return Ok(());
        }
        let message = std::mem::take(&mut self.failures).join("; ");
        Err(VitrinaError::AssertionFailed { message })
    }
}
