//! Problem record data model.
//!
//! Defines the shapes stored in the sharded problem stores: one
//! [`ProblemRecord`] per line, each carrying accepted and rejected
//! [`SolutionAttempt`]s, plus the closed categorical enums for language,
//! problem source, and difficulty. The store encodes the categoricals as
//! numeric wire codes; both the codes and their upper-case wire names are
//! accepted on decode and validated at this boundary.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Helper for categoricals that arrive either as a wire code or a name.
#[derive(Deserialize)]
#[serde(untagged)]
enum CodeOrName {
    Code(u64),
    Name(String),
}

/// Submission language of a solution attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    UnknownLanguage,
    /// Python 2.
    Python,
    Cpp,
    Python3,
    Java,
}

impl Language {
    const ALL: [Language; 5] = [
        Language::UnknownLanguage,
        Language::Python,
        Language::Cpp,
        Language::Python3,
        Language::Java,
    ];

    const NAMES: [&'static str; 5] = ["UNKNOWN_LANGUAGE", "PYTHON", "CPP", "PYTHON3", "JAVA"];

    /// The languages the selection pipeline groups and samples; attempts in
    /// any other language are dropped. Array order is the column order of
    /// the exported report.
    pub const RELEVANT: [Language; 3] = [Language::Cpp, Language::Java, Language::Python3];

    pub fn from_code(code: u64) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(name))
    }

    pub fn code(self) -> u64 {
        self as u64
    }

    /// Upper-case wire name, as used in report column headers.
    pub fn as_str(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    pub fn is_relevant(self) -> bool {
        Self::RELEVANT.contains(&self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match CodeOrName::deserialize(deserializer)? {
            CodeOrName::Code(code) => Language::from_code(code)
                .ok_or_else(|| de::Error::custom(format!("unknown language code {code}"))),
            CodeOrName::Name(name) => Language::from_name(&name)
                .ok_or_else(|| de::Error::custom(format!("unknown language name '{name}'"))),
        }
    }
}

/// Contest site a problem was collected from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProblemSource {
    #[default]
    UnknownSource,
    Codechef,
    Codeforces,
    Hackerearth,
    Codejam,
    Atcoder,
    Aizu,
}

impl ProblemSource {
    const ALL: [ProblemSource; 7] = [
        ProblemSource::UnknownSource,
        ProblemSource::Codechef,
        ProblemSource::Codeforces,
        ProblemSource::Hackerearth,
        ProblemSource::Codejam,
        ProblemSource::Atcoder,
        ProblemSource::Aizu,
    ];

    const NAMES: [&'static str; 7] = [
        "UNKNOWN_SOURCE",
        "CODECHEF",
        "CODEFORCES",
        "HACKEREARTH",
        "CODEJAM",
        "ATCODER",
        "AIZU",
    ];

    pub fn from_code(code: u64) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|source| source.as_str().eq_ignore_ascii_case(name))
    }

    pub fn code(self) -> u64 {
        self as u64
    }

    pub fn as_str(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

impl fmt::Display for ProblemSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ProblemSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProblemSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match CodeOrName::deserialize(deserializer)? {
            CodeOrName::Code(code) => ProblemSource::from_code(code)
                .ok_or_else(|| de::Error::custom(format!("unknown source code {code}"))),
            CodeOrName::Name(name) => ProblemSource::from_name(&name)
                .ok_or_else(|| de::Error::custom(format!("unknown source name '{name}'"))),
        }
    }
}

/// Difficulty label of a problem.
///
/// The coarse labels come first; `A` through `V` are the per-contest letter
/// levels used by sites that index problems by position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    #[default]
    UnknownDifficulty,
    Easy,
    Medium,
    Hard,
    Harder,
    Hardest,
    External,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
}

impl Difficulty {
    const ALL: [Difficulty; 29] = [
        Difficulty::UnknownDifficulty,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Harder,
        Difficulty::Hardest,
        Difficulty::External,
        Difficulty::A,
        Difficulty::B,
        Difficulty::C,
        Difficulty::D,
        Difficulty::E,
        Difficulty::F,
        Difficulty::G,
        Difficulty::H,
        Difficulty::I,
        Difficulty::J,
        Difficulty::K,
        Difficulty::L,
        Difficulty::M,
        Difficulty::N,
        Difficulty::O,
        Difficulty::P,
        Difficulty::Q,
        Difficulty::R,
        Difficulty::S,
        Difficulty::T,
        Difficulty::U,
        Difficulty::V,
    ];

    const NAMES: [&'static str; 29] = [
        "UNKNOWN_DIFFICULTY",
        "EASY",
        "MEDIUM",
        "HARD",
        "HARDER",
        "HARDEST",
        "EXTERNAL",
        "A",
        "B",
        "C",
        "D",
        "E",
        "F",
        "G",
        "H",
        "I",
        "J",
        "K",
        "L",
        "M",
        "N",
        "O",
        "P",
        "Q",
        "R",
        "S",
        "T",
        "U",
        "V",
    ];

    pub fn from_code(code: u64) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str().eq_ignore_ascii_case(name))
    }

    pub fn code(self) -> u64 {
        self as u64
    }

    pub fn as_str(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Difficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match CodeOrName::deserialize(deserializer)? {
            CodeOrName::Code(code) => Difficulty::from_code(code)
                .ok_or_else(|| de::Error::custom(format!("unknown difficulty code {code}"))),
            CodeOrName::Name(name) => Difficulty::from_name(&name)
                .ok_or_else(|| de::Error::custom(format!("unknown difficulty name '{name}'"))),
        }
    }
}

/// One recorded solution submission for a problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionAttempt {
    pub language: Language,

    /// Raw solution text. May be empty or whitespace-only; such attempts
    /// are dropped before grouping.
    #[serde(default)]
    pub solution: String,
}

impl SolutionAttempt {
    pub fn new(language: Language, solution: impl Into<String>) -> Self {
        Self {
            language,
            solution: solution.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.solution.trim().is_empty()
    }
}

/// A single problem as stored in a shard: metadata plus the accepted and
/// rejected solution attempts recorded for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub source: ProblemSource,

    #[serde(default)]
    pub difficulty: Difficulty,

    /// Attempts recorded as passing the problem's reference tests.
    #[serde(default)]
    pub solutions: Vec<SolutionAttempt>,

    /// Attempts recorded as failing the problem's reference tests.
    #[serde(default)]
    pub incorrect_solutions: Vec<SolutionAttempt>,
}

impl ProblemRecord {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_display() {
        assert_eq!(Language::Cpp.to_string(), "CPP");
        assert_eq!(Language::Java.to_string(), "JAVA");
        assert_eq!(Language::Python3.to_string(), "PYTHON3");
        assert_eq!(Language::UnknownLanguage.to_string(), "UNKNOWN_LANGUAGE");
    }

    #[test]
    fn test_language_codes_round_trip() {
        for code in 0..5u64 {
            let lang = Language::from_code(code).expect("code in range");
            assert_eq!(lang.code(), code);
        }
        assert!(Language::from_code(5).is_none());
    }

    #[test]
    fn test_relevant_languages() {
        assert!(Language::Cpp.is_relevant());
        assert!(Language::Java.is_relevant());
        assert!(Language::Python3.is_relevant());
        assert!(!Language::Python.is_relevant());
        assert!(!Language::UnknownLanguage.is_relevant());
    }

    #[test]
    fn test_language_deserialize_code_and_name() {
        let from_code: Language = serde_json::from_str("2").expect("code should decode");
        assert_eq!(from_code, Language::Cpp);

        let from_name: Language = serde_json::from_str("\"JAVA\"").expect("name should decode");
        assert_eq!(from_name, Language::Java);

        assert!(serde_json::from_str::<Language>("99").is_err());
        assert!(serde_json::from_str::<Language>("\"COBOL\"").is_err());
    }

    #[test]
    fn test_source_and_difficulty_names() {
        assert_eq!(ProblemSource::Codeforces.to_string(), "CODEFORCES");
        assert_eq!(ProblemSource::from_code(2), Some(ProblemSource::Codeforces));
        assert_eq!(Difficulty::from_code(9), Some(Difficulty::C));
        assert_eq!(Difficulty::C.to_string(), "C");
        assert_eq!(Difficulty::from_name("medium"), Some(Difficulty::Medium));
        assert!(Difficulty::from_code(29).is_none());
    }

    #[test]
    fn test_attempt_blankness() {
        assert!(SolutionAttempt::new(Language::Cpp, "").is_blank());
        assert!(SolutionAttempt::new(Language::Cpp, " \n\t ").is_blank());
        assert!(!SolutionAttempt::new(Language::Cpp, "int main(){}").is_blank());
    }

    #[test]
    fn test_record_decoding_defaults() {
        let record: ProblemRecord =
            serde_json::from_str(r#"{"name":"p1"}"#).expect("minimal record should decode");
        assert_eq!(record.name, "p1");
        assert_eq!(record.description(), "");
        assert_eq!(record.source, ProblemSource::UnknownSource);
        assert_eq!(record.difficulty, Difficulty::UnknownDifficulty);
        assert!(record.solutions.is_empty());
        assert!(record.incorrect_solutions.is_empty());
    }

    #[test]
    fn test_record_decoding_full() {
        let raw = r#"{
            "name": "1575_B. Building",
            "description": "Build the tallest tower.",
            "source": 2,
            "difficulty": "B",
            "solutions": [{"language": 2, "solution": "int main(){}"}],
            "incorrect_solutions": [{"language": 4, "solution": "class Main {}"}]
        }"#;
        let record: ProblemRecord = serde_json::from_str(raw).expect("record should decode");
        assert_eq!(record.source, ProblemSource::Codeforces);
        assert_eq!(record.difficulty, Difficulty::B);
        assert_eq!(record.solutions[0].language, Language::Cpp);
        assert_eq!(record.incorrect_solutions[0].language, Language::Java);
    }

    #[test]
    fn test_record_rejects_unknown_codes() {
        let raw = r#"{"name":"p","solutions":[{"language":42,"solution":"x"}]}"#;
        assert!(serde_json::from_str::<ProblemRecord>(raw).is_err());
    }
}
