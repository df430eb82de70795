//! Rule packs and the compiled, ordered rule table.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CadetError, Result};

use super::check::CheckSpec;
use super::key::{KeyMatcher, MatchSpec, RuleKey};
use super::predicate::{CheckPredicate, FaultedPredicate, Predicate, RuleFault};

/// A rule pack as written in YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub name: String,
    pub version: String,
    pub rules: Vec<RuleSpec>,
}

/// One rule in a pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "match")]
    pub matcher: MatchSpec,
    pub checks: Vec<CheckSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_message: Option<String>,
}

impl RuleSet {
    /// Parse a rule pack from a YAML string. Structure is not checked here.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| CadetError::ContentError(format!("failed to parse rule pack YAML: {}", e)))
    }
}

/// A rule ready for dispatch.
pub struct RuleEntry {
    pub id: String,
    pub description: Option<String>,
    pub matcher: KeyMatcher,
    pub predicate: Box<dyn Predicate>,
    /// Set when the rule could not be compiled; the predicate then always faults.
    pub fault: Option<RuleFault>,
}

impl std::fmt::Debug for RuleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEntry")
            .field("id", &self.id)
            .field("matcher", &self.matcher.to_string())
            .field("fault", &self.fault)
            .finish()
    }
}

/// Ordered rules; the first whose matcher accepts a key wins.
#[derive(Debug)]
pub struct RuleTable {
    name: String,
    version: String,
    entries: Vec<RuleEntry>,
}

impl RuleTable {
    /// An empty table. Every lookup misses until rules are pushed.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            entries: Vec::new(),
        }
    }

    /// Compile a rule pack.
    ///
    /// Structural problems (blank name or version, missing or duplicate rule
    /// ids, rules without checks, unusable matchers) are content errors. A
    /// pattern that does not compile only disables its own rule, which then
    /// faults whenever it is selected.
    pub fn from_rule_set(set: RuleSet) -> Result<Self> {
        if set.name.trim().is_empty() {
            return Err(content_error("rule pack name must be non-empty"));
        }
        if set.version.trim().is_empty() {
            return Err(content_error("rule pack version must be non-empty"));
        }

        let mut table = Self::new(set.name, set.version);
        let mut seen = HashSet::new();

        for (index, rule) in set.rules.into_iter().enumerate() {
            if rule.id.trim().is_empty() {
                return Err(content_error(&format!(
                    "rule #{} has an empty id",
                    index + 1
                )));
            }
            if !seen.insert(rule.id.clone()) {
                return Err(content_error(&format!("duplicate rule id '{}'", rule.id)));
            }
            if rule.checks.is_empty() {
                return Err(content_error(&format!(
                    "rule '{}' must declare at least one check",
                    rule.id
                )));
            }
            let matcher = KeyMatcher::from_spec(&rule.matcher).ok_or_else(|| {
                content_error(&format!(
                    "rule '{}' needs at least one `all` or `any` keyword, and no blank keywords",
                    rule.id
                ))
            })?;

            let compiled = CheckPredicate::compile(&rule.checks, rule.pass_message);
            let fault = compiled.as_ref().err().cloned();
            let predicate: Box<dyn Predicate> = match compiled {
                Ok(predicate) => Box::new(predicate),
                Err(fault) => {
                    tracing::warn!(rule = %rule.id, error = %fault, "rule disabled");
                    Box::new(FaultedPredicate::new(fault))
                }
            };

            table.entries.push(RuleEntry {
                id: rule.id,
                description: rule.description,
                matcher,
                predicate,
                fault,
            });
        }

        tracing::debug!(
            pack = %table.name,
            version = %table.version,
            rules = table.entries.len(),
            "rule table compiled"
        );
        Ok(table)
    }

    /// Parse and compile a rule pack from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::from_rule_set(RuleSet::from_yaml(yaml)?)
    }

    /// Load and compile a rule pack file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CadetError::UserError(format!(
                "failed to read rule pack '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Append a programmatic rule. It is tried after every existing rule.
    pub fn push(
        &mut self,
        id: impl Into<String>,
        matcher: KeyMatcher,
        predicate: Box<dyn Predicate>,
    ) -> &mut Self {
        self.entries.push(RuleEntry {
            id: id.into(),
            description: None,
            matcher,
            predicate,
            fault: None,
        });
        self
    }

    /// First rule whose matcher accepts `key`.
    pub fn lookup(&self, key: &RuleKey) -> Option<&RuleEntry> {
        self.entries.iter().find(|entry| entry.matcher.matches(key))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn content_error(detail: &str) -> CadetError {
    CadetError::ContentError(format!("rule pack validation failed: {}", detail))
}
