//! Implementation of the `cadet rules` command.

use crate::cli::RulesArgs;
use crate::config::Config;
use crate::error::Result;
use crate::validate::RuleTable;

use super::load_rule_table;

/// Execute the `cadet rules` command.
pub fn cmd_rules(config: &Config, args: RulesArgs) -> Result<()> {
    let table = load_rule_table(config, args.rules.as_deref())?;
    print!("{}", format_rules(&table));
    Ok(())
}

pub(super) fn format_rules(table: &RuleTable) -> String {
    let mut out = format!(
        "Rule pack {} (version {}), {} rules in dispatch order:\n\n",
        table.name(),
        table.version(),
        table.len()
    );

    for (i, entry) in table.entries().iter().enumerate() {
        out.push_str(&format!("{:>3}. {}  {}\n", i + 1, entry.id, entry.matcher));
        if let Some(description) = &entry.description {
            out.push_str(&format!("     {}\n", description));
        }
        if let Some(fault) = &entry.fault {
            out.push_str(&format!("     DISABLED: {}\n", fault));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_listing_in_order() {
        let table = RuleTable::builtin().unwrap();
        let text = format_rules(&table);

        assert!(text.starts_with("Rule pack anchor-academy"));
        let first = text.find("rust-immutable-bindings").unwrap();
        let later = text.find("debug-mutable-reference").unwrap();
        assert!(first < later);
        assert!(!text.contains("DISABLED"));
    }

    #[test]
    fn test_faulted_rule_is_flagged() {
        let table = RuleTable::from_yaml(
            "name: n\nversion: '1'\nrules:\n  - id: bad\n    match: { all: [x] }\n    checks: [{ kind: require, pattern: '[', message: m }]\n",
        )
        .unwrap();

        assert!(format_rules(&table).contains("DISABLED: invalid pattern '['"));
    }
}
