//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for cadet.
///
/// This struct represents the contents of `cadet.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Fallback predicate
    // =========================================================================
    /// Minimum trimmed length (in chars) a submission must exceed to pass a
    /// test that no rule recognizes.
    #[serde(default = "default_fallback_min_length")]
    pub fallback_min_length: usize,

    /// Marker whose presence means the submission is unfinished.
    #[serde(default = "default_placeholder_marker")]
    pub placeholder_marker: String,

    /// Whole-word keywords, at least one of which must appear.
    #[serde(default = "default_structural_keywords")]
    pub structural_keywords: Vec<String>,

    // =========================================================================
    // Runs
    // =========================================================================
    /// Simulated compile delay before a check runs, in milliseconds.
    #[serde(default)]
    pub compile_delay_ms: u64,

    /// How a lesson without tests is treated.
    #[serde(default)]
    pub empty_lesson_policy: EmptyLessonPolicy,

    // =========================================================================
    // Content and output
    // =========================================================================
    /// Lesson catalog to use instead of the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Rule pack to use instead of the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_path: Option<PathBuf>,

    /// NDJSON event log to append check results to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_min_length: default_fallback_min_length(),
            placeholder_marker: default_placeholder_marker(),
            structural_keywords: default_structural_keywords(),
            compile_delay_ms: 0,
            empty_lesson_policy: EmptyLessonPolicy::default(),
            catalog_path: None,
            rules_path: None,
            events_path: None,
        }
    }
}
