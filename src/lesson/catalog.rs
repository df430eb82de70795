//! Catalog loading, validation, and lookup.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CadetError, Result};

use super::types::{Chapter, Lesson};

/// YAML source of the built-in catalog.
pub const BUILTIN_LESSONS: &str = include_str!("../../content/lessons.yaml");

/// Every chapter and lesson the learner can pick from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub version: String,
    pub chapters: Vec<Chapter>,
}

impl Catalog {
    /// Parse the embedded catalog.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_LESSONS)
    }

    /// Load a catalog from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CadetError::UserError(format!(
                "failed to read lesson catalog '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a catalog from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let catalog: Catalog = serde_yaml::from_str(yaml).map_err(|e| {
            CadetError::ContentError(format!("failed to parse lesson catalog YAML: {}", e))
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate catalog structure.
    ///
    /// Validation rules:
    /// - lesson ids are non-empty and unique across the catalog
    /// - test names are non-empty and unique within their lesson
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();

        for lesson in self.chapters.iter().flat_map(|c| &c.lessons) {
            if lesson.id.trim().is_empty() {
                return Err(content_error(&format!(
                    "lesson '{}' has an empty id",
                    lesson.title
                )));
            }
            if !ids.insert(lesson.id.as_str()) {
                return Err(content_error(&format!(
                    "duplicate lesson id '{}'",
                    lesson.id
                )));
            }

            let mut names = HashSet::new();
            for test in &lesson.tests {
                if test.name.trim().is_empty() {
                    return Err(content_error(&format!(
                        "lesson '{}' has a test with an empty name",
                        lesson.id
                    )));
                }
                if !names.insert(test.name.as_str()) {
                    return Err(content_error(&format!(
                        "lesson '{}' has duplicate test '{}'",
                        lesson.id, test.name
                    )));
                }
            }
        }

        Ok(())
    }

    /// Find a lesson by id.
    pub fn find(&self, id: &str) -> Option<&Lesson> {
        self.lessons().into_iter().find(|lesson| lesson.id == id)
    }

    /// Find a lesson by id, or fail with a user error listing known ids.
    pub fn require(&self, id: &str) -> Result<&Lesson> {
        self.find(id).ok_or_else(|| {
            let known: Vec<&str> = self.lessons().iter().map(|l| l.id.as_str()).collect();
            CadetError::UserError(format!(
                "unknown lesson '{}'. Known lessons: {}",
                id,
                known.join(", ")
            ))
        })
    }

    /// All lessons, chapter by chapter, each chapter sorted by lesson order.
    pub fn lessons(&self) -> Vec<&Lesson> {
        self.chapters
            .iter()
            .flat_map(|chapter| {
                let mut lessons: Vec<&Lesson> = chapter.lessons.iter().collect();
                lessons.sort_by_key(|l| l.order);
                lessons
            })
            .collect()
    }
}

fn content_error(detail: &str) -> CadetError {
    CadetError::ContentError(format!("lesson catalog validation failed: {}", detail))
}
