//! Problem selection: language grouping, inclusion predicates, and
//! deterministic solution sampling.
//!
//! Two selector variants share the grouping stage but differ in predicate
//! and sampling policy: [`FullEquivSelector`] requires two accepted and one
//! rejected attempt per language and reseeds per record, while
//! [`CrossEquivSelector`] requires one accepted attempt per language and
//! advances a single run-long generator.

mod cross_equiv;
mod full_equiv;
mod groups;

pub use cross_equiv::{CrossEquivRow, CrossEquivSelector};
pub use full_equiv::{FullEquivRow, FullEquivSelector, LanguageCell};
pub use groups::{GroupCounts, LanguageGroup, LanguageGroups};

/// Base seed used when the caller does not override it.
pub const DEFAULT_BASE_SEED: u64 = 41;

/// Outcome of evaluating one problem: the per-language attempt counts
/// (available for both verdicts, so skips can be logged with context), plus
/// the output row when the inclusion predicate held.
#[derive(Debug, Clone)]
pub struct Evaluation<R> {
    pub counts: GroupCounts,
    pub row: Option<R>,
}
