//! Command implementations for cadet.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the catalog and rule pack resolution they share.

mod check;
mod lessons;
mod rules;

use std::path::Path;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{CadetError, Result};
use crate::lesson::Catalog;
use crate::validate::RuleTable;

/// Dispatch a command to its implementation.
///
/// Resolves the config first so every command sees the same settings.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        CadetError::UserError(format!("failed to determine current directory: {}", e))
    })?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Command::Lessons => lessons::cmd_lessons(&config),
        Command::Show(args) => lessons::cmd_show(&config, args),
        Command::Code(args) => lessons::cmd_code(&config, args),
        Command::Rules(args) => rules::cmd_rules(&config, args),
        Command::Check(args) => check::cmd_check(&config, args),
    }
}

/// Resolve the lesson catalog: `catalog_path` from config, else the built-in
/// catalog.
fn load_catalog(config: &Config) -> Result<Catalog> {
    match config.catalog_path.as_deref() {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading lesson catalog");
            Catalog::load(path)
        }
        None => Catalog::builtin(),
    }
}

/// Resolve the rule table: an explicit path, else `rules_path` from config,
/// else the built-in pack.
fn load_rule_table(config: &Config, explicit: Option<&Path>) -> Result<RuleTable> {
    match explicit.or(config.rules_path.as_deref()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading rule pack");
            RuleTable::load(path)
        }
        None => RuleTable::builtin(),
    }
}
