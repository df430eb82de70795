//! Cadet: a lesson validation engine.
//!
//! Learners submit source text for a lesson; each of the lesson's named tests
//! is mapped to a rule that inspects the text statically and yields a verdict
//! with an itemized diagnostic. Nothing is compiled or executed.
//!
//! The library surface is used by the `cadet` binary and by integration tests.

pub mod cli;
pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod lesson;
pub mod report;
pub mod schedule;
pub mod validate;
