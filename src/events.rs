//! Event logging for cadet.
//!
//! Check results are appended to an NDJSON file (one JSON object per line)
//! for an external progress tracker to consume. Nothing in cadet reads the
//! log back.
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: `check` or `lesson_complete`
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `lesson`: The lesson the event is about
//! - `details`: Freeform object with action-specific details
//!
//! ```no_run
//! use cadet::events::{Event, EventAction, append_event};
//! use serde_json::json;
//!
//! let event = Event::new(EventAction::Check, "rust-variables")
//!     .with_details(json!({"passed": 7, "total": 7}));
//! append_event("events.ndjson", &event)?;
//! # Ok::<(), cadet::error::CadetError>(())
//! ```

use crate::error::{CadetError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A submission was checked.
    Check,
    /// Every test of a lesson passed.
    LessonComplete,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Check => write!(f, "check"),
            EventAction::LessonComplete => write!(f, "lesson_complete"),
        }
    }
}

/// An event record for the progress log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// Lesson id.
    pub lesson: String,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event with the given action for a lesson.
    ///
    /// The timestamp is set to the current time, and the actor is
    /// determined from the environment (USER@HOSTNAME).
    pub fn new(action: EventAction, lesson: impl Into<String>) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            lesson: lesson.into(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| CadetError::UserError(format!("failed to serialize event to JSON: {}", e)))
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the log at `path`.
///
/// The file and its parent directory are created if missing. Each append
/// writes exactly one line.
pub fn append_event<P: AsRef<Path>>(path: P, event: &Event) -> Result<()> {
    let path = path.as_ref();
    let json_line = event.to_ndjson_line()?;

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir).map_err(|e| {
            CadetError::UserError(format!(
                "failed to create events directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            CadetError::UserError(format!(
                "failed to open events file '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        CadetError::UserError(format!(
            "failed to write event to '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_event_creation() {
        let event = Event::new(EventAction::Check, "rust-variables");

        assert_eq!(event.action, EventAction::Check);
        assert_eq!(event.lesson, "rust-variables");
        assert!(event.actor.contains('@'));
        // Timestamp should be recent (within last minute)
        let age = Utc::now().signed_duration_since(event.ts);
        assert!(age.num_minutes() < 1);
    }

    #[test]
    fn test_event_with_details() {
        let event = Event::new(EventAction::Check, "pda-derive")
            .with_details(json!({"passed": 3, "total": 5}));

        assert_eq!(event.details["passed"], 3);
        assert_eq!(event.details["total"], 5);
    }

    #[test]
    fn test_event_serialization() {
        let event = Event::new(EventAction::LessonComplete, "cpi-basics")
            .with_details(json!({"earned_points": 100}));

        let json_line = event.to_ndjson_line().unwrap();

        let parsed: Event = serde_json::from_str(&json_line).unwrap();
        assert_eq!(parsed.action, EventAction::LessonComplete);
        assert_eq!(parsed.lesson, "cpi-basics");
        assert!(json_line.contains("\"lesson_complete\""));
        assert!(!json_line.contains('\n'));
    }

    #[test]
    fn test_append_event_creates_file_and_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("events.ndjson");

        append_event(&path, &Event::new(EventAction::Check, "rust-variables")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_append_event_multiple_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("events.ndjson");

        append_event(&path, &Event::new(EventAction::Check, "a")).unwrap();
        append_event(&path, &Event::new(EventAction::LessonComplete, "a")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Event = serde_json::from_str(lines[0]).unwrap();
        let second: Event = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first.action, EventAction::Check);
        assert_eq!(second.action, EventAction::LessonComplete);
    }

    #[test]
    fn test_append_event_unwritable_path_is_user_error() {
        let temp = TempDir::new().unwrap();
        // A directory cannot be opened for appending.
        let err = append_event(temp.path(), &Event::new(EventAction::Check, "a")).unwrap_err();
        assert!(matches!(err, CadetError::UserError(_)));
    }
}
