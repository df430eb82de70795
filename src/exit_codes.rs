//! Exit code constants for the cadet CLI.
//!
//! - 0: Success (lesson complete, or a listing command succeeded)
//! - 1: User error (bad args, unknown lesson, unreadable submission)
//! - 2: Validation failure (lesson incomplete or not gradable)
//! - 3: Content error (malformed catalog, rule pack, or config)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown lesson, or unreadable input.
pub const USER_ERROR: i32 = 1;

/// Validation failure: at least one test failed, or the lesson has no tests.
pub const VALIDATION_FAILURE: i32 = 2;

/// Content failure: the catalog, rule pack, or config could not be used.
pub const CONTENT_FAILURE: i32 = 3;
