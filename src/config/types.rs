//! Configuration types and defaults for cadet.

use serde::{Deserialize, Serialize};

/// How a lesson that defines no tests is graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmptyLessonPolicy {
    /// Nothing was checked, so the lesson cannot be completed (default).
    #[default]
    NotGradable,
    /// Vacuous truth: zero tests means every test passed.
    Complete,
}

/// Default structural keywords for the fallback predicate.
pub fn default_structural_keywords() -> Vec<String> {
    ["fn", "struct", "impl", "enum", "trait", "mod"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// Default value functions for serde
pub(crate) fn default_fallback_min_length() -> usize {
    50
}
pub(crate) fn default_placeholder_marker() -> String {
    "TODO".to_string()
}
