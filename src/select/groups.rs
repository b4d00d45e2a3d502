//! Partitioning of a problem's attempts into per-language groups.

use std::fmt;

use crate::record::{Language, ProblemRecord};

/// Accepted and rejected attempt texts for one language, blanks excluded.
#[derive(Debug, Clone, Default)]
pub struct LanguageGroup<'a> {
    pub accepted: Vec<&'a str>,
    pub rejected: Vec<&'a str>,
}

/// A problem's attempts partitioned by language, restricted to
/// [`Language::RELEVANT`]. Attempts in other languages get no bucket at
/// all, and whitespace-only texts are discarded before counting.
#[derive(Debug, Clone)]
pub struct LanguageGroups<'a> {
    groups: [LanguageGroup<'a>; Language::RELEVANT.len()],
}

impl<'a> LanguageGroups<'a> {
    pub fn from_record(record: &'a ProblemRecord) -> Self {
        let mut groups: [LanguageGroup<'a>; Language::RELEVANT.len()] = Default::default();

        for attempt in &record.solutions {
            if attempt.is_blank() {
                continue;
            }
            if let Some(slot) = Self::slot(attempt.language) {
                groups[slot].accepted.push(attempt.solution.as_str());
            }
        }
        for attempt in &record.incorrect_solutions {
            if attempt.is_blank() {
                continue;
            }
            if let Some(slot) = Self::slot(attempt.language) {
                groups[slot].rejected.push(attempt.solution.as_str());
            }
        }

        Self { groups }
    }

    fn slot(language: Language) -> Option<usize> {
        Language::RELEVANT.iter().position(|&lang| lang == language)
    }

    /// Groups in [`Language::RELEVANT`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &LanguageGroup<'a>)> + '_ {
        Language::RELEVANT.iter().copied().zip(self.groups.iter())
    }

    /// True when `predicate` holds for every relevant language's group.
    pub fn all(&self, predicate: impl FnMut(&LanguageGroup<'a>) -> bool) -> bool {
        self.groups.iter().all(predicate)
    }

    pub fn counts(&self) -> GroupCounts {
        GroupCounts {
            entries: std::array::from_fn(|slot| {
                (
                    Language::RELEVANT[slot],
                    self.groups[slot].accepted.len(),
                    self.groups[slot].rejected.len(),
                )
            }),
        }
    }
}

/// Per-language (accepted, rejected) attempt counts for one problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCounts {
    entries: [(Language, usize, usize); Language::RELEVANT.len()],
}

impl GroupCounts {
    pub fn entries(&self) -> [(Language, usize, usize); Language::RELEVANT.len()] {
        self.entries
    }
}

impl fmt::Display for GroupCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (language, accepted, rejected)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{language}(pass={accepted},fail={rejected})")?;
        }
        Ok(())
    }
}
