//! The rule pack compiled into the binary.

use crate::error::Result;

use super::table::RuleTable;

/// YAML source of the built-in rule pack.
pub const BUILTIN_RULES: &str = include_str!("../../content/rules.yaml");

impl RuleTable {
    /// Compile the built-in rule pack.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_RULES)
    }
}
