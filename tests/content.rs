//! The built-in catalog and rule pack agree with each other.

use cadet::lesson::Catalog;
use cadet::validate::{RuleKey, RuleTable, Validator};

fn setup() -> (Catalog, Validator) {
    let catalog = Catalog::builtin().expect("built-in catalog parses");
    let table = RuleTable::builtin().expect("built-in rule pack compiles");
    (catalog, Validator::new(table))
}

#[test]
fn every_solution_passes_every_test() {
    let (catalog, validator) = setup();

    for lesson in catalog.lessons() {
        let report = validator.validate(&lesson.solution, &lesson.tests);
        for verdict in report.failed() {
            panic!(
                "solution of '{}' fails '{}':\n{}",
                lesson.id, verdict.test.name, verdict.message
            );
        }
        assert_eq!(report.earned_points, lesson.total_points());
    }
}

#[test]
fn every_starter_fails_at_least_one_test() {
    let (catalog, validator) = setup();

    for lesson in catalog.lessons() {
        let report = validator.validate(&lesson.initial, &lesson.tests);
        assert!(
            report.failed_count() > 0,
            "starter code of '{}' already passes every test",
            lesson.id
        );
    }
}

#[test]
fn every_lesson_tells_a_story() {
    let (catalog, _) = setup();

    for lesson in catalog.lessons() {
        assert!(!lesson.story.trim().is_empty(), "'{}' has no story", lesson.id);
    }
}

#[test]
fn every_test_name_has_a_rule() {
    let (catalog, validator) = setup();

    for lesson in catalog.lessons() {
        for test in &lesson.tests {
            assert!(
                validator.table().lookup(&RuleKey::new(&test.name)).is_some(),
                "no rule for '{}' in '{}'",
                test.name,
                lesson.id
            );
        }
    }
}

#[test]
fn every_rule_is_used() {
    let (catalog, validator) = setup();

    let used: Vec<&str> = catalog
        .lessons()
        .iter()
        .flat_map(|lesson| &lesson.tests)
        .filter_map(|test| validator.table().lookup(&RuleKey::new(&test.name)))
        .map(|entry| entry.id.as_str())
        .collect();

    for entry in validator.table().entries() {
        assert!(used.contains(&entry.id.as_str()), "rule '{}' is never selected", entry.id);
    }
}

#[test]
fn solution_verdicts_name_their_rules() {
    let (catalog, validator) = setup();
    let lesson = catalog.find("anchor-program-structure").unwrap();

    let report = validator.validate(&lesson.solution, &lesson.tests);
    let rules: Vec<Option<&str>> = report.verdicts.iter().map(|v| v.rule.as_deref()).collect();

    assert!(rules.iter().all(Option::is_some));
    assert!(rules.contains(&Some("anchor-require-and-errors")));
    assert!(rules.contains(&Some("anchor-best-practices")));
}
