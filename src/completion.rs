//! Whether a checked submission completes its lesson.

use serde::Serialize;

use crate::config::EmptyLessonPolicy;
use crate::validate::ValidationReport;

/// The completion decision for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LessonOutcome {
    /// Every test passed. Only this outcome signals completion.
    Complete,
    /// At least one test failed.
    Incomplete { failed: usize },
    /// There was nothing to grade.
    NotGradable,
}

impl LessonOutcome {
    pub fn from_report(report: &ValidationReport, policy: EmptyLessonPolicy) -> Self {
        if report.total_tests == 0 {
            return match policy {
                EmptyLessonPolicy::NotGradable => LessonOutcome::NotGradable,
                EmptyLessonPolicy::Complete => LessonOutcome::Complete,
            };
        }

        match report.failed_count() {
            0 => LessonOutcome::Complete,
            failed => LessonOutcome::Incomplete { failed },
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, LessonOutcome::Complete)
    }
}

impl std::fmt::Display for LessonOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LessonOutcome::Complete => write!(f, "lesson complete"),
            LessonOutcome::Incomplete { failed: 1 } => write!(f, "1 test failed"),
            LessonOutcome::Incomplete { failed } => write!(f, "{} tests failed", failed),
            LessonOutcome::NotGradable => write!(f, "lesson has no tests to grade"),
        }
    }
}
