//! Implementation of the `cadet lessons`, `cadet show`, and `cadet code` commands.

use crate::cli::{CodeArgs, ShowArgs};
use crate::config::Config;
use crate::error::Result;
use crate::lesson::{Catalog, Lesson};

use super::load_catalog;

/// Execute the `cadet lessons` command.
pub fn cmd_lessons(config: &Config) -> Result<()> {
    let catalog = load_catalog(config)?;
    print!("{}", format_catalog(&catalog));
    Ok(())
}

/// Execute the `cadet show` command.
pub fn cmd_show(config: &Config, args: ShowArgs) -> Result<()> {
    let catalog = load_catalog(config)?;
    let lesson = catalog.require(&args.lesson)?;
    print!("{}", format_lesson(lesson));
    Ok(())
}

/// Execute the `cadet code` command.
pub fn cmd_code(config: &Config, args: CodeArgs) -> Result<()> {
    let catalog = load_catalog(config)?;
    let lesson = catalog.require(&args.lesson)?;
    let code = if args.solution {
        &lesson.solution
    } else {
        &lesson.initial
    };
    print!("{}", code);
    if !code.ends_with('\n') {
        println!();
    }
    Ok(())
}

pub(super) fn format_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();

    for chapter in &catalog.chapters {
        out.push_str(&format!("{} [{}]\n", chapter.title, chapter.id));

        let mut lessons: Vec<&Lesson> = chapter.lessons.iter().collect();
        lessons.sort_by_key(|l| l.order);

        for lesson in lessons {
            out.push_str(&format!(
                "  {:<26} {:<13} {:>2} tests {:>4} pts  {}\n",
                lesson.id,
                lesson.difficulty,
                lesson.tests.len(),
                lesson.total_points(),
                lesson.title
            ));
        }
        out.push('\n');
    }

    out
}

pub(super) fn format_lesson(lesson: &Lesson) -> String {
    let mut out = String::new();

    out.push_str("================================================================================\n");
    out.push_str(&format!("{} [{}]\n", lesson.title, lesson.id));
    out.push_str("================================================================================\n\n");

    out.push_str(&format!("Difficulty: {}\n", lesson.difficulty));
    out.push_str(&format!("Time:       ~{} min\n", lesson.estimated_time));
    out.push_str(&format!("Points:     {}\n\n", lesson.total_points()));

    if !lesson.description.is_empty() {
        out.push_str(&lesson.description);
        out.push_str("\n\n");
    }

    if !lesson.story.is_empty() {
        out.push_str("Story:\n");
        for line in lesson.story.trim_end().lines() {
            if line.is_empty() {
                out.push('\n');
            } else {
                out.push_str(&format!("  {}\n", line));
            }
        }
        out.push('\n');
    }

    if !lesson.objectives.is_empty() {
        out.push_str("Objectives:\n");
        for objective in &lesson.objectives {
            out.push_str(&format!("  - {}\n", objective));
        }
        out.push('\n');
    }

    out.push_str("Tests:\n");
    for test in &lesson.tests {
        out.push_str(&format!("  - {} ({} pts)\n", test.name, test.points));
        if !test.description.is_empty() {
            out.push_str(&format!("      {}\n", test.description));
        }
    }

    if !lesson.hints.is_empty() {
        out.push_str("\nHints:\n");
        for (i, hint) in lesson.hints.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, hint));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_listing_includes_every_lesson() {
        let catalog = Catalog::builtin().unwrap();
        let text = format_catalog(&catalog);

        for lesson in catalog.lessons() {
            assert!(text.contains(&lesson.id), "missing {}", lesson.id);
        }
        assert!(text.contains("7 tests"));
    }

    #[test]
    fn test_lesson_details() {
        let catalog = Catalog::builtin().unwrap();
        let text = format_lesson(catalog.find("rust-variables").unwrap());

        assert!(text.contains("[rust-variables]"));
        assert!(text.contains("Difficulty: beginner"));
        assert!(text.contains("Immutable variables correctly defined"));
        assert!(text.contains("Objectives:"));
        assert!(text.contains("Hints:"));

        let story = text.find("Story:").unwrap();
        assert!(story < text.find("Objectives:").unwrap());
        assert!(text.contains("  **Welcome to the Anchor Academy, Space Cadet!**"));
    }

    #[test]
    fn test_lesson_without_story_has_no_story_section() {
        let catalog = Catalog::builtin().unwrap();
        let mut lesson = catalog.find("rust-variables").unwrap().clone();
        lesson.story.clear();

        assert!(!format_lesson(&lesson).contains("Story:"));
    }
}
