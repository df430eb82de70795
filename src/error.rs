//! Error types for the cadet CLI.
//!
//! Uses thiserror for derive macros. Validation itself never produces these:
//! a failing test is a verdict, not an error. They cover the outer surface.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for cadet operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum CadetError {
    /// User provided invalid arguments or unreadable input.
    #[error("{0}")]
    UserError(String),

    /// The lesson was checked but is not complete.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Lesson content, a rule pack, or the config file is malformed.
    #[error("Invalid content: {0}")]
    ContentError(String),
}

impl CadetError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CadetError::UserError(_) => exit_codes::USER_ERROR,
            CadetError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            CadetError::ContentError(_) => exit_codes::CONTENT_FAILURE,
        }
    }
}

/// Result type alias for cadet operations.
pub type Result<T> = std::result::Result<T, CadetError>;
