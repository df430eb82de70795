//! Test specifications, verdicts, and the aggregate report.

use serde::{Deserialize, Serialize};

/// A named test a lesson is graded against.
///
/// `check` is a human-readable hint for authors and learners; it is never
/// executed. Which rule evaluates the test is decided by `name` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub check: String,
    pub points: u32,
}

impl TestSpec {
    /// Create a test spec with empty description and check hint.
    pub fn new(name: impl Into<String>, points: u32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            check: String::new(),
            points,
        }
    }
}

/// The result of evaluating one test against a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub test: TestSpec,
    pub passed: bool,
    pub message: String,
    /// Id of the rule that decided the verdict; `None` for the generic fallback.
    pub rule: Option<String>,
}

/// One verdict per test, in input order, plus aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub verdicts: Vec<Verdict>,
    pub total_tests: usize,
    pub passed_count: usize,
    pub earned_points: u64,
    pub total_points: u64,
}

impl ValidationReport {
    /// Build a report, deriving every aggregate from the verdicts.
    ///
    /// Points are summed as `u64`, which cannot overflow for any number of
    /// `u32` point values a catalog can hold.
    pub fn from_verdicts(verdicts: Vec<Verdict>) -> Self {
        let total_tests = verdicts.len();
        let passed_count = verdicts.iter().filter(|v| v.passed).count();
        let earned_points = verdicts
            .iter()
            .filter(|v| v.passed)
            .map(|v| u64::from(v.test.points))
            .sum();
        let total_points = verdicts.iter().map(|v| u64::from(v.test.points)).sum();

        Self {
            verdicts,
            total_tests,
            passed_count,
            earned_points,
            total_points,
        }
    }

    /// Verdicts that did not pass, in order.
    pub fn failed(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| !v.passed)
    }

    pub fn failed_count(&self) -> usize {
        self.total_tests - self.passed_count
    }

    /// True when there is at least one test and every test passed.
    pub fn all_passed(&self) -> bool {
        self.total_tests > 0 && self.passed_count == self.total_tests
    }
}
