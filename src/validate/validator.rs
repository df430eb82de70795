//! The submission validator: one verdict per test, never an error.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::config::Config;

use super::fallback::GenericFallback;
use super::key::RuleKey;
use super::predicate::{Outcome, RuleFault};
use super::submission::Submission;
use super::table::RuleTable;
use super::types::{TestSpec, ValidationReport, Verdict};

/// Dispatches each test to a rule by name and collects the verdicts.
///
/// A `Validator` holds no mutable state, so one instance can be shared
/// across threads and reused for any number of submissions.
#[derive(Debug)]
pub struct Validator {
    table: RuleTable,
    fallback: GenericFallback,
}

impl Validator {
    /// Validator with the default fallback settings.
    pub fn new(table: RuleTable) -> Self {
        Self {
            table,
            fallback: GenericFallback::default(),
        }
    }

    /// Validator whose fallback follows `config`.
    pub fn from_config(table: RuleTable, config: &Config) -> Self {
        Self {
            table,
            fallback: GenericFallback::from_config(config),
        }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Evaluate every test against the submission.
    ///
    /// The report has exactly one verdict per test, in the same order. A rule
    /// that faults or panics fails only its own test, with a message starting
    /// `Validation error:`.
    ///
    /// # Example
    ///
    /// ```
    /// use cadet::validate::{RuleTable, TestSpec, Validator};
    ///
    /// let validator = Validator::new(RuleTable::builtin().unwrap());
    /// let tests = vec![TestSpec::new("Immutable variables correctly defined", 15)];
    ///
    /// let report = validator.validate(r#"let ship_name = "USS Solana";"#, &tests);
    /// assert!(report.verdicts[0].passed);
    /// ```
    pub fn validate(&self, submission: &str, tests: &[TestSpec]) -> ValidationReport {
        let submission = Submission::new(submission);
        let verdicts = tests
            .iter()
            .map(|test| self.judge(&submission, test))
            .collect();
        ValidationReport::from_verdicts(verdicts)
    }

    fn judge(&self, submission: &Submission, test: &TestSpec) -> Verdict {
        let key = RuleKey::new(&test.name);

        let (outcome, rule) = match self.table.lookup(&key) {
            Some(entry) => {
                let result = catch_unwind(AssertUnwindSafe(|| entry.predicate.evaluate(submission)))
                    .unwrap_or_else(|payload| Err(RuleFault::Panicked(panic_detail(payload))));

                let outcome = result.unwrap_or_else(|fault| {
                    tracing::warn!(test = %test.name, rule = %entry.id, error = %fault, "rule faulted");
                    Outcome::fail(format!("Validation error: {}", fault))
                });
                (outcome, Some(entry.id.clone()))
            }
            None => (self.fallback.judge(submission), None),
        };

        tracing::debug!(
            test = %test.name,
            rule = rule.as_deref().unwrap_or("<fallback>"),
            passed = outcome.passed,
            "verdict"
        );

        Verdict {
            test: test.clone(),
            passed: outcome.passed,
            message: outcome.message,
            rule,
        }
    }
}

fn panic_detail(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
