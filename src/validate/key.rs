//! Rule keys and keyword matchers.

use serde::{Deserialize, Serialize};

/// A test name normalized for rule lookup: lowercase, trimmed, and with runs
/// of whitespace collapsed to a single space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleKey(String);

impl RuleKey {
    pub fn new(name: &str) -> Self {
        Self(normalize(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keyword lists as written in a rule pack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSpec {
    pub all: Vec<String>,
    pub any: Vec<String>,
    pub none: Vec<String>,
}

/// Decides whether a rule applies to a key by substring tests.
///
/// - every `all` keyword must occur
/// - if `any` is non-empty, at least one of its keywords must occur
/// - no `none` keyword may occur
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatcher {
    all: Vec<String>,
    any: Vec<String>,
    none: Vec<String>,
}

impl KeyMatcher {
    /// Build a matcher, normalizing every keyword like a key.
    ///
    /// Returns `None` when neither `all` nor `any` has a usable keyword, or
    /// when any keyword is blank, since such a matcher would accept
    /// everything.
    pub fn new(all: &[String], any: &[String], none: &[String]) -> Option<Self> {
        let norm = |words: &[String]| -> Option<Vec<String>> {
            words
                .iter()
                .map(|w| {
                    let n = normalize(w);
                    (!n.is_empty()).then_some(n)
                })
                .collect()
        };

        let matcher = Self {
            all: norm(all)?,
            any: norm(any)?,
            none: norm(none)?,
        };

        if matcher.all.is_empty() && matcher.any.is_empty() {
            return None;
        }
        Some(matcher)
    }

    pub fn from_spec(spec: &MatchSpec) -> Option<Self> {
        Self::new(&spec.all, &spec.any, &spec.none)
    }

    /// Convenience for a matcher with only `all` keywords.
    pub fn all_of(keywords: &[&str]) -> Option<Self> {
        let all: Vec<String> = keywords.iter().map(|k| k.to_string()).collect();
        Self::new(&all, &[], &[])
    }

    pub fn matches(&self, key: &RuleKey) -> bool {
        let key = key.as_str();
        self.all.iter().all(|k| key.contains(k.as_str()))
            && (self.any.is_empty() || self.any.iter().any(|k| key.contains(k.as_str())))
            && !self.none.iter().any(|k| key.contains(k.as_str()))
    }
}

impl std::fmt::Display for KeyMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if !self.all.is_empty() {
            parts.push(format!("all[{}]", self.all.join(", ")));
        }
        if !self.any.is_empty() {
            parts.push(format!("any[{}]", self.any.join(", ")));
        }
        if !self.none.is_empty() {
            parts.push(format!("none[{}]", self.none.join(", ")));
        }
        f.write_str(&parts.join(" "))
    }
}
