//! Implementation of the `cadet check` command.
//!
//! Reads a submission, waits out the compile delay, validates it against the
//! lesson's tests, prints the report, records events, and turns the
//! completion decision into the exit status.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::json;

use crate::cli::CheckArgs;
use crate::completion::LessonOutcome;
use crate::config::Config;
use crate::error::{CadetError, Result};
use crate::events::{Event, EventAction, append_event};
use crate::lesson::Lesson;
use crate::report::{render_report, render_verbose};
use crate::schedule::{RunResult, RunScheduler};
use crate::validate::{ValidationReport, Validator};

use super::{load_catalog, load_rule_table};

/// Result of a completed check, before anything is printed.
#[derive(Debug, Serialize)]
pub(super) struct CheckRun {
    pub outcome: LessonOutcome,
    pub report: ValidationReport,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    lesson: &'a str,
    #[serde(flatten)]
    run: &'a CheckRun,
}

/// Execute the `cadet check` command.
pub fn cmd_check(config: &Config, args: CheckArgs) -> Result<()> {
    let catalog = load_catalog(config)?;
    let lesson = catalog.require(&args.lesson)?;
    let submission = read_submission(args.file.as_deref())?;

    let delay = Duration::from_millis(args.delay_ms.unwrap_or(config.compile_delay_ms));
    if !delay.is_zero() && !args.json {
        eprintln!("Compiling...");
    }

    let run = run_check(config, lesson, args.rules.as_deref(), submission, delay)?;

    if args.json {
        println!("{}", render_json(&lesson.id, &run)?);
    } else if args.all {
        print!("{}", render_verbose(&run.report));
    } else {
        print!("{}", render_report(&run.report));
    }

    if let Some(path) = events_path(config, args.events) {
        record_events(&path, lesson, &run)?;
    }

    if run.outcome.is_complete() {
        Ok(())
    } else {
        Err(CadetError::ValidationError(format!(
            "{}: {}",
            lesson.id, run.outcome
        )))
    }
}

/// Validate `submission` against `lesson` after `delay`.
pub(super) fn run_check(
    config: &Config,
    lesson: &Lesson,
    rules: Option<&Path>,
    submission: String,
    delay: Duration,
) -> Result<CheckRun> {
    let table = load_rule_table(config, rules)?;
    let scheduler = RunScheduler::new(Arc::new(Validator::from_config(table, config)));

    let report = match scheduler.schedule(submission, lesson.tests.clone(), delay).wait() {
        RunResult::Completed(report) => report,
        RunResult::Superseded | RunResult::Cancelled => {
            return Err(CadetError::UserError(
                "the check was interrupted before it ran".to_string(),
            ));
        }
    };

    let outcome = LessonOutcome::from_report(&report, config.empty_lesson_policy);
    tracing::info!(
        lesson = %lesson.id,
        passed = report.passed_count,
        total = report.total_tests,
        "check finished"
    );

    Ok(CheckRun { outcome, report })
}

fn render_json(lesson: &str, run: &CheckRun) -> Result<String> {
    serde_json::to_string_pretty(&JsonOutput { lesson, run })
        .map_err(|e| CadetError::UserError(format!("failed to serialize report to JSON: {}", e)))
}

fn events_path(config: &Config, explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| config.events_path.clone())
}

/// Append a `check` event, and a `lesson_complete` event when complete.
pub(super) fn record_events(path: &Path, lesson: &Lesson, run: &CheckRun) -> Result<()> {
    let check = Event::new(EventAction::Check, &lesson.id).with_details(json!({
        "passed": run.report.passed_count,
        "total": run.report.total_tests,
        "earned_points": run.report.earned_points,
        "total_points": run.report.total_points,
        "outcome": run.outcome,
    }));
    append_event(path, &check)?;

    if run.outcome.is_complete() {
        let complete = Event::new(EventAction::LessonComplete, &lesson.id).with_details(json!({
            "earned_points": run.report.earned_points,
        }));
        append_event(path, &complete)?;
    }

    Ok(())
}

/// Read the submission from a file, or from stdin for `None` and `-`.
fn read_submission(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path).map_err(|e| {
            CadetError::UserError(format!(
                "failed to read submission '{}': {}",
                path.display(),
                e
            ))
        }),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map_err(|e| {
                CadetError::UserError(format!("failed to read submission from stdin: {}", e))
            })?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::Catalog;
    use tempfile::TempDir;

    fn lesson(id: &str) -> Lesson {
        Catalog::builtin().unwrap().find(id).unwrap().clone()
    }

    #[test]
    fn test_solution_completes_lesson() {
        let lesson = lesson("rust-variables");
        let run = run_check(
            &Config::default(),
            &lesson,
            None,
            lesson.solution.clone(),
            Duration::ZERO,
        )
        .unwrap();

        assert_eq!(run.outcome, LessonOutcome::Complete);
        assert_eq!(run.report.earned_points, run.report.total_points);
    }

    #[test]
    fn test_starter_is_incomplete() {
        let lesson = lesson("rust-variables");
        let run = run_check(
            &Config::default(),
            &lesson,
            None,
            lesson.initial.clone(),
            Duration::from_millis(5),
        )
        .unwrap();

        assert!(matches!(run.outcome, LessonOutcome::Incomplete { .. }));
    }

    #[test]
    fn test_custom_rule_pack_from_file() {
        let temp = TempDir::new().unwrap();
        let pack = temp.path().join("pack.yaml");
        std::fs::write(
            &pack,
            "name: strict\nversion: '1'\nrules:\n  - id: never\n    match: { all: [immutable] }\n    checks: [{ kind: require, pattern: 'IMPOSSIBLE', message: nope }]\n",
        )
        .unwrap();
        let lesson = lesson("rust-variables");

        let run = run_check(
            &Config::default(),
            &lesson,
            Some(&pack),
            lesson.solution.clone(),
            Duration::ZERO,
        )
        .unwrap();

        let verdict = &run.report.verdicts[0];
        assert_eq!(verdict.rule.as_deref(), Some("never"));
        assert!(!verdict.passed);
    }

    #[test]
    fn test_missing_rule_pack_is_user_error() {
        let lesson = lesson("rust-variables");
        let err = run_check(
            &Config::default(),
            &lesson,
            Some(Path::new("/nonexistent/pack.yaml")),
            String::new(),
            Duration::ZERO,
        )
        .unwrap_err();
        assert!(matches!(err, CadetError::UserError(_)));
    }

    #[test]
    fn test_events_record_completion() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("events.ndjson");
        let lesson = lesson("pda-derive");

        let run = run_check(
            &Config::default(),
            &lesson,
            None,
            lesson.solution.clone(),
            Duration::ZERO,
        )
        .unwrap();
        record_events(&path, &lesson, &run).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Event = serde_json::from_str(lines[0]).unwrap();
        let second: Event = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first.action, EventAction::Check);
        assert_eq!(first.details["outcome"]["status"], "complete");
        assert_eq!(second.action, EventAction::LessonComplete);
        assert_eq!(second.lesson, "pda-derive");
    }

    #[test]
    fn test_events_skip_completion_when_incomplete() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("events.ndjson");
        let lesson = lesson("pda-derive");

        let run = run_check(
            &Config::default(),
            &lesson,
            None,
            lesson.initial.clone(),
            Duration::ZERO,
        )
        .unwrap();
        record_events(&path, &lesson, &run).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_json_output_shape() {
        let lesson = lesson("cpi-basics");
        let run = run_check(
            &Config::default(),
            &lesson,
            None,
            String::new(),
            Duration::ZERO,
        )
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&render_json(&lesson.id, &run).unwrap()).unwrap();
        assert_eq!(json["lesson"], "cpi-basics");
        assert_eq!(json["outcome"]["status"], "incomplete");
        assert_eq!(json["report"]["total_tests"], 4);
        assert_eq!(json["report"]["passed_count"], 0);
        assert_eq!(json["report"]["verdicts"][0]["test"]["name"], "Transfer CPI is called");
        assert_eq!(json["report"]["verdicts"][0]["rule"], "cpi-transfer-call");
    }

    #[test]
    fn test_events_path_prefers_cli() {
        let config = Config {
            events_path: Some(PathBuf::from("config.ndjson")),
            ..Default::default()
        };

        assert_eq!(
            events_path(&config, Some(PathBuf::from("cli.ndjson"))),
            Some(PathBuf::from("cli.ndjson"))
        );
        assert_eq!(
            events_path(&config, None),
            Some(PathBuf::from("config.ndjson"))
        );
        assert_eq!(events_path(&Config::default(), None), None);
    }

    #[test]
    fn test_read_submission_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("main.rs");
        std::fs::write(&path, "fn main() {}\n").unwrap();

        assert_eq!(read_submission(Some(&path)).unwrap(), "fn main() {}\n");

        let err = read_submission(Some(&temp.path().join("missing.rs"))).unwrap_err();
        assert!(matches!(err, CadetError::UserError(_)));
    }
}
