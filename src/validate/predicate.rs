//! The predicate seam: anything that can turn a submission into an outcome.

use thiserror::Error;

use super::check::{CheckSpec, CompiledCheck};
use super::submission::Submission;

/// Pass/fail plus the learner-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub passed: bool,
    pub message: String,
}

impl Outcome {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }

    /// Summarize independent sub-checks.
    ///
    /// On failure the message is `N of M checks failed:` followed by one
    /// `- <message>` line per failure, in order. On success it is
    /// `pass_message`, or `All M checks passed.` when none is given.
    pub fn from_checks(total: usize, failures: &[&str], pass_message: Option<&str>) -> Self {
        if failures.is_empty() {
            return match pass_message {
                Some(msg) => Self::pass(msg),
                None => Self::pass(format!("All {} checks passed.", total)),
            };
        }

        let mut message = format!("{} of {} checks failed:", failures.len(), total);
        for failure in failures {
            message.push_str("\n- ");
            message.push_str(failure);
        }
        Self::fail(message)
    }
}

/// Why a rule could not produce an outcome.
///
/// A fault is never the learner's fault; it becomes a failing verdict
/// reading `Validation error: <fault>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleFault {
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("{0}")]
    Internal(String),

    #[error("rule panicked: {0}")]
    Panicked(String),
}

/// Evaluates a submission for one test.
///
/// Implementations must be deterministic and free of side effects other
/// than logging.
pub trait Predicate: Send + Sync {
    fn evaluate(&self, submission: &Submission) -> Result<Outcome, RuleFault>;
}

impl<F> Predicate for F
where
    F: Fn(&Submission) -> Result<Outcome, RuleFault> + Send + Sync,
{
    fn evaluate(&self, submission: &Submission) -> Result<Outcome, RuleFault> {
        self(submission)
    }
}

/// A predicate made of declarative checks from a rule pack.
#[derive(Debug)]
pub struct CheckPredicate {
    checks: Vec<CompiledCheck>,
    pass_message: Option<String>,
}

impl CheckPredicate {
    /// Compile every check; the first bad pattern aborts compilation.
    pub fn compile(checks: &[CheckSpec], pass_message: Option<String>) -> Result<Self, RuleFault> {
        let checks = checks
            .iter()
            .map(CompiledCheck::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            checks,
            pass_message,
        })
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Predicate for CheckPredicate {
    fn evaluate(&self, submission: &Submission) -> Result<Outcome, RuleFault> {
        let failures: Vec<&str> = self
            .checks
            .iter()
            .filter(|check| !check.passes(submission))
            .map(CompiledCheck::message)
            .collect();

        Ok(Outcome::from_checks(
            self.checks.len(),
            &failures,
            self.pass_message.as_deref(),
        ))
    }
}

/// Stands in for a rule that failed to compile. It still claims its keys so
/// that a broken rule surfaces as a fault instead of silently falling back.
#[derive(Debug)]
pub struct FaultedPredicate {
    fault: RuleFault,
}

impl FaultedPredicate {
    pub fn new(fault: RuleFault) -> Self {
        Self { fault }
    }
}

impl Predicate for FaultedPredicate {
    fn evaluate(&self, _submission: &Submission) -> Result<Outcome, RuleFault> {
        Err(self.fault.clone())
    }
}
