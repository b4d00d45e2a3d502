//! Cross-language selection: every relevant language must carry at least
//! one accepted attempt; one accepted text is then sampled per language.

use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::record::{Language, ProblemRecord};
use crate::sanitize::{clean_code, clean_text};

use super::groups::LanguageGroups;
use super::Evaluation;

/// One selected problem, flattened for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossEquivRow {
    pub source: String,
    pub problem_name: String,
    pub description: String,
    /// One sampled accepted solution per language, in
    /// [`Language::RELEVANT`] order.
    pub solutions: [String; Language::RELEVANT.len()],
}

/// Selector for the cross-language report.
///
/// Owns a single generator seeded at construction and advanced across
/// records: which text is drawn for a problem depends on how many
/// qualifying problems came before it in the run.
#[derive(Debug, Clone)]
pub struct CrossEquivSelector {
    rng: ChaCha8Rng,
}

impl CrossEquivSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Evaluate one problem, advancing the generator when it is selected.
    pub fn evaluate(&mut self, record: &ProblemRecord) -> Evaluation<CrossEquivRow> {
        let groups = LanguageGroups::from_record(record);
        let counts = groups.counts();

        if !groups.all(|group| !group.accepted.is_empty()) {
            return Evaluation { counts, row: None };
        }

        let mut solutions: [String; Language::RELEVANT.len()] = Default::default();
        for (slot, (_, group)) in groups.iter().enumerate() {
            solutions[slot] = clean_code(
                group
                    .accepted
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or_default(),
            );
        }

        let row = CrossEquivRow {
            source: clean_text(record.source.as_str()),
            problem_name: clean_text(&record.name),
            description: clean_text(record.description()),
            solutions,
        };

        Evaluation {
            counts,
            row: Some(row),
        }
    }
}
