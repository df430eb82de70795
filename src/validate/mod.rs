//! Validation engine for cadet.
//!
//! Maps each named test of a lesson to a pass/fail verdict by static text
//! inspection of the learner's submission:
//! - Test names are normalized into rule keys and dispatched, first match
//!   wins, through an ordered rule table compiled from a YAML rule pack
//! - Rules run independent sub-checks (regex, substring, delimiter balance)
//!   and itemize the ones that failed
//! - Names no rule recognizes go to a generic "looks finished" fallback
//!
//! Nothing here compiles or executes submitted code.
//!
//! Error handling:
//! - Validation never returns an error; faults become failing verdicts
//! - Structural problems in a rule pack are content errors (exit 3)

mod builtin;
mod check;
mod fallback;
mod key;
mod predicate;
mod submission;
mod table;
mod types;
mod validator;


// Re-export public API
pub use builtin::BUILTIN_RULES;
pub use check::{CheckKind, CheckSpec, CompiledCheck, Scope};
pub use fallback::GenericFallback;
pub use key::{KeyMatcher, MatchSpec, RuleKey};
pub use predicate::{CheckPredicate, FaultedPredicate, Outcome, Predicate, RuleFault};
pub use submission::{Submission, strip_comments};
pub use table::{RuleEntry, RuleSet, RuleSpec, RuleTable};
pub use types::{TestSpec, ValidationReport, Verdict};
pub use validator::Validator;
