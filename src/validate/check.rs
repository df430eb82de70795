//! Declarative sub-checks and their compiled form.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::predicate::RuleFault;
use super::submission::Submission;

/// Which view of the submission a check inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Comments removed (default).
    #[default]
    Code,
    /// The submission exactly as typed.
    Raw,
}

/// What a check tests for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckKind {
    /// The pattern must match.
    Require { pattern: String },
    /// The pattern must not match.
    Forbid { pattern: String },
    /// At least one of the patterns must match.
    RequireAny { patterns: Vec<String> },
    /// The pattern must match at least `min` times.
    RequireCount { pattern: String, min: usize },
    /// The literal text must occur.
    Contains { text: String },
    /// Delimiters must be balanced outside comments and strings.
    Balanced,
}

/// A check as written in a rule pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSpec {
    #[serde(flatten)]
    pub kind: CheckKind,
    /// Shown to the learner when the check fails.
    pub message: String,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub ignore_case: bool,
}

enum Test {
    Require(Regex),
    Forbid(Regex),
    RequireAny(Vec<Regex>),
    RequireCount(Regex, usize),
    Contains { text: String, ignore_case: bool },
    Balanced,
}

/// A check with its patterns compiled.
pub struct CompiledCheck {
    test: Test,
    message: String,
    scope: Scope,
}

impl std::fmt::Debug for CompiledCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.test {
            Test::Require(_) => "require",
            Test::Forbid(_) => "forbid",
            Test::RequireAny(_) => "require_any",
            Test::RequireCount(..) => "require_count",
            Test::Contains { .. } => "contains",
            Test::Balanced => "balanced",
        };
        f.debug_struct("CompiledCheck")
            .field("kind", &kind)
            .field("message", &self.message)
            .field("scope", &self.scope)
            .finish()
    }
}

impl CompiledCheck {
    /// Compile a check. Patterns are multi-line, so `^` and `$` anchor at
    /// line boundaries.
    pub fn compile(spec: &CheckSpec) -> Result<Self, RuleFault> {
        let ignore_case = spec.ignore_case;

        let test = match &spec.kind {
            CheckKind::Require { pattern } => Test::Require(compile_pattern(pattern, ignore_case)?),
            CheckKind::Forbid { pattern } => Test::Forbid(compile_pattern(pattern, ignore_case)?),
            CheckKind::RequireAny { patterns } => Test::RequireAny(
                patterns
                    .iter()
                    .map(|p| compile_pattern(p, ignore_case))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            CheckKind::RequireCount { pattern, min } => {
                Test::RequireCount(compile_pattern(pattern, ignore_case)?, *min)
            }
            CheckKind::Contains { text } => Test::Contains {
                text: if ignore_case {
                    text.to_lowercase()
                } else {
                    text.clone()
                },
                ignore_case,
            },
            CheckKind::Balanced => Test::Balanced,
        };

        Ok(Self {
            test,
            message: spec.message.clone(),
            scope: spec.scope,
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the submission satisfies this check.
    pub fn passes(&self, submission: &Submission) -> bool {
        let text = match self.scope {
            Scope::Code => submission.code(),
            Scope::Raw => submission.raw(),
        };

        match &self.test {
            Test::Require(re) => re.is_match(text),
            Test::Forbid(re) => !re.is_match(text),
            Test::RequireAny(res) => res.iter().any(|re| re.is_match(text)),
            Test::RequireCount(re, min) => re.find_iter(text).take(*min).count() >= *min,
            Test::Contains { text: needle, ignore_case } => {
                if *ignore_case {
                    text.to_lowercase().contains(needle.as_str())
                } else {
                    text.contains(needle.as_str())
                }
            }
            Test::Balanced => submission.is_balanced(),
        }
    }
}

fn compile_pattern(pattern: &str, ignore_case: bool) -> Result<Regex, RuleFault> {
    RegexBuilder::new(pattern)
        .multi_line(true)
        .case_insensitive(ignore_case)
        .build()
        .map_err(|e| RuleFault::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}
