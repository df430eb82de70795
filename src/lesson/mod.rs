//! Lesson catalog for cadet.
//!
//! Chapters group lessons; each lesson carries its story, starter code,
//! reference solution, hints, and the named tests it is graded against.
//! The built-in catalog is embedded from `content/lessons.yaml`.

mod catalog;
mod types;


// Re-export public API
pub use catalog::{BUILTIN_LESSONS, Catalog};
pub use types::{Chapter, Difficulty, Lesson};
