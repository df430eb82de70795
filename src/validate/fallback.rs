//! The generic predicate used when no rule recognizes a test name.

use crate::config::Config;

use super::predicate::{Outcome, Predicate, RuleFault};
use super::submission::Submission;

/// Passes submissions that look finished: long enough, free of the
/// placeholder marker, and containing at least one structural keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericFallback {
    min_length: usize,
    placeholder: String,
    keywords: Vec<String>,
}

impl Default for GenericFallback {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl GenericFallback {
    pub fn from_config(config: &Config) -> Self {
        Self {
            min_length: config.fallback_min_length,
            placeholder: config.placeholder_marker.clone(),
            keywords: config.structural_keywords.clone(),
        }
    }

    /// Evaluate without the `Result` wrapper; the fallback cannot fault.
    pub fn judge(&self, submission: &Submission) -> Outcome {
        let length = submission.raw().trim().chars().count();
        let too_short = format!(
            "submission is too short ({} characters, needs more than {})",
            length, self.min_length
        );
        let placeholder = format!(
            "submission still contains the placeholder `{}`",
            self.placeholder
        );
        let no_keyword = format!(
            "no structural keyword found (expected one of: {})",
            self.keywords.join(", ")
        );

        let mut failures = Vec::new();
        if length <= self.min_length {
            failures.push(too_short.as_str());
        }
        if submission.raw().contains(self.placeholder.as_str()) {
            failures.push(placeholder.as_str());
        }
        if !self.has_keyword(submission.code()) {
            failures.push(no_keyword.as_str());
        }

        Outcome::from_checks(3, &failures, Some("Submission looks complete."))
    }

    fn has_keyword(&self, text: &str) -> bool {
        text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .any(|word| self.keywords.iter().any(|k| k == word))
    }
}

impl Predicate for GenericFallback {
    fn evaluate(&self, submission: &Submission) -> Result<Outcome, RuleFault> {
        Ok(self.judge(submission))
    }
}
