//! CLI argument parsing for cadet.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Cadet: check lesson submissions against named tests.
///
/// Each lesson defines tests by name; a rule pack maps those names to static
/// text checks. Submissions are never compiled or run.
#[derive(Parser, Debug)]
#[command(name = "cadet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./cadet.yaml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log output (-v for debug, -vv for trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for cadet.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List chapters and lessons.
    ///
    /// Shows each lesson's id, difficulty, test count, and points.
    Lessons,

    /// Show a lesson.
    ///
    /// Prints the description, objectives, tests, and hints.
    Show(ShowArgs),

    /// Print a lesson's starter code or reference solution.
    Code(CodeArgs),

    /// List the rule table in dispatch order.
    Rules(RulesArgs),

    /// Check a submission against a lesson's tests.
    ///
    /// Exits 0 when every test passes, 2 otherwise.
    Check(CheckArgs),
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Lesson id (e.g., rust-variables).
    pub lesson: String,
}

/// Arguments for the `code` command.
#[derive(Parser, Debug)]
pub struct CodeArgs {
    /// Lesson id.
    pub lesson: String,

    /// Print the reference solution instead of the starter code.
    #[arg(long)]
    pub solution: bool,
}

/// Arguments for the `rules` command.
#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Rule pack to list instead of the configured or built-in one.
    #[arg(long, value_name = "PATH")]
    pub rules: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Lesson id.
    pub lesson: String,

    /// Submission file; `-` or omitted reads stdin.
    pub file: Option<PathBuf>,

    /// Rule pack to use instead of the configured or built-in one.
    #[arg(long, value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// List passing tests too.
    #[arg(short, long)]
    pub all: bool,

    /// Simulated compile delay in milliseconds (overrides config).
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Append check events to this NDJSON file (overrides config).
    #[arg(long, value_name = "PATH")]
    pub events: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
