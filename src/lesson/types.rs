//! Chapter and lesson definitions.

use serde::{Deserialize, Serialize};

use crate::validate::TestSpec;

/// How demanding a lesson is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        };
        f.pad(name)
    }
}

/// A group of lessons, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

/// A single lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Markdown narrative shown in the story panel.
    #[serde(default)]
    pub story: String,
    /// Chapter number as shown to learners.
    pub chapter: u32,
    /// Position within the chapter.
    pub order: u32,
    pub difficulty: Difficulty,
    /// Estimated minutes to complete.
    pub estimated_time: u32,
    #[serde(default)]
    pub objectives: Vec<String>,
    /// Starter code shown in the editor.
    pub initial: String,
    /// Reference solution.
    pub solution: String,
    #[serde(default)]
    pub tests: Vec<TestSpec>,
    #[serde(default)]
    pub hints: Vec<String>,
}

impl Lesson {
    pub fn total_points(&self) -> u64 {
        self.tests.iter().map(|t| u64::from(t.points)).sum()
    }
}
