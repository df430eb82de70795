//! Learner-facing rendering of a validation report.
//!
//! Pure formatting: pass/fail decisions are already in the report.

use crate::validate::{ValidationReport, Verdict};

/// Render the report shown after a run.
///
/// ```text
/// 2 of 7 tests failed:
/// ✗ Mutable variables correctly defined (15 pts)
///     1 of 3 checks failed:
///     - `crew_count` must be declared with `let mut`
/// ✗ Mission readiness logic (10 pts)
///     ...
///
/// Score: 75/100 points
/// ```
pub fn render_report(report: &ValidationReport) -> String {
    render(report, false)
}

/// Like [`render_report`], but passing tests are listed too (`✓ <name>`).
pub fn render_verbose(report: &ValidationReport) -> String {
    render(report, true)
}

fn render(report: &ValidationReport, verbose: bool) -> String {
    if report.total_tests == 0 {
        return "No tests are defined for this lesson.\n".to_string();
    }

    let mut out = String::new();

    if report.all_passed() {
        out.push_str(&format!("All {} tests passed!\n", report.total_tests));
        if verbose {
            for verdict in &report.verdicts {
                push_verdict(&mut out, verdict, false);
            }
        }
    } else {
        out.push_str(&format!(
            "{} of {} tests failed:\n",
            report.failed_count(),
            report.total_tests
        ));
        for verdict in &report.verdicts {
            if !verdict.passed {
                push_verdict(&mut out, verdict, true);
            } else if verbose {
                push_verdict(&mut out, verdict, false);
            }
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "Score: {}/{} points\n",
        report.earned_points, report.total_points
    ));
    out
}

fn push_verdict(out: &mut String, verdict: &Verdict, with_message: bool) {
    if verdict.passed {
        out.push_str(&format!("✓ {}\n", verdict.test.name));
    } else {
        out.push_str(&format!(
            "✗ {} ({} pts)\n",
            verdict.test.name, verdict.test.points
        ));
    }

    if with_message {
        for line in verdict.message.lines() {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
    }
}
