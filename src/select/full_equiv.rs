//! Full-equivalence selection: every relevant language must carry at least
//! two accepted and one rejected attempt; two accepted and one rejected
//! text are then sampled per language.

use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::record::{Language, ProblemRecord};
use crate::sanitize::{clean_code, clean_text};

use super::groups::LanguageGroups;
use super::Evaluation;

/// Per-language portion of a [`FullEquivRow`]: attempt counts plus the
/// sampled texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCell {
    pub pass_count: usize,
    pub fail_count: usize,
    pub pass_samples: [String; 2],
    pub fail_sample: String,
}

/// One selected problem, flattened for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullEquivRow {
    pub source: String,
    /// Shard the problem was read from.
    pub file: String,
    pub problem_name: String,
    pub description: String,
    pub difficulty: String,
    /// Cells in [`Language::RELEVANT`] order.
    pub languages: [LanguageCell; Language::RELEVANT.len()],
}

/// Selector for the full-equivalence report.
///
/// Owns only the base seed; each record gets a fresh generator derived from
/// it, so evaluation needs no mutable state.
#[derive(Debug, Clone)]
pub struct FullEquivSelector {
    base_seed: u64,
}

impl FullEquivSelector {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Evaluate one problem.
    ///
    /// `position` is the 1-based count of records examined so far in the
    /// run, including skipped ones. The sampling generator is seeded from
    /// `base_seed + position`, which makes every draw reproducible for an
    /// unchanged input sequence. Removing or reordering upstream records
    /// shifts the draws for everything after them.
    pub fn evaluate(
        &self,
        shard: &str,
        record: &ProblemRecord,
        position: u64,
    ) -> Evaluation<FullEquivRow> {
        let groups = LanguageGroups::from_record(record);
        let counts = groups.counts();

        let qualifies = groups.all(|group| group.accepted.len() >= 2)
            && groups.all(|group| !group.rejected.is_empty());
        if !qualifies {
            return Evaluation { counts, row: None };
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.base_seed.wrapping_add(position));

        // Fixed draw order: the accepted pair for each language, then one
        // rejected attempt for each language.
        let mut pass_samples: [[String; 2]; Language::RELEVANT.len()] = Default::default();
        for (slot, (_, group)) in groups.iter().enumerate() {
            let picked: Vec<&str> = group
                .accepted
                .choose_multiple(&mut rng, 2)
                .copied()
                .collect();
            pass_samples[slot] = [clean_code(picked[0]), clean_code(picked[1])];
        }

        let mut fail_samples: [String; Language::RELEVANT.len()] = Default::default();
        for (slot, (_, group)) in groups.iter().enumerate() {
            fail_samples[slot] =
                clean_code(group.rejected.choose(&mut rng).copied().unwrap_or_default());
        }

        let entries = counts.entries();
        let row = FullEquivRow {
            source: clean_text(record.source.as_str()),
            file: clean_text(shard),
            problem_name: clean_text(&record.name),
            description: clean_text(record.description()),
            difficulty: clean_text(record.difficulty.as_str()),
            languages: std::array::from_fn(|slot| LanguageCell {
                pass_count: entries[slot].1,
                fail_count: entries[slot].2,
                pass_samples: std::mem::take(&mut pass_samples[slot]),
                fail_sample: std::mem::take(&mut fail_samples[slot]),
            }),
        };

        Evaluation {
            counts,
            row: Some(row),
        }
    }
}
