//! Fixed column schemas for the two report variants.

use crate::select::{CrossEquivRow, FullEquivRow};

/// One cell of an output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Count(usize),
}

/// A selected record that can be laid out as one spreadsheet row.
///
/// `cells` must produce exactly one value per entry of `headers`, in
/// header order.
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<Cell>;
}

/// Full-equivalence report columns: problem metadata, the per-language
/// attempt counts, then the per-language sampled texts.
pub const FULL_EQUIV_HEADERS: [&str; 20] = [
    "Source",
    "File",
    "ProblemName",
    "Description",
    "Difficulty",
    "CPP_PassCount",
    "CPP_FailCount",
    "JAVA_PassCount",
    "JAVA_FailCount",
    "PYTHON3_PassCount",
    "PYTHON3_FailCount",
    "CPP_Pass1",
    "CPP_Pass2",
    "CPP_Fail",
    "JAVA_Pass1",
    "JAVA_Pass2",
    "JAVA_Fail",
    "PYTHON3_Pass1",
    "PYTHON3_Pass2",
    "PYTHON3_Fail",
];

/// Cross-language report columns: problem metadata plus one sampled
/// accepted solution per language.
pub const CROSS_EQUIV_HEADERS: [&str; 6] = [
    "Source",
    "ProblemName",
    "Description",
    "CPP_Solution",
    "JAVA_Solution",
    "PYTHON3_Solution",
];

impl TableRow for FullEquivRow {
    fn headers() -> &'static [&'static str] {
        &FULL_EQUIV_HEADERS
    }

    fn cells(&self) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(FULL_EQUIV_HEADERS.len());
        cells.push(Cell::Text(self.source.clone()));
        cells.push(Cell::Text(self.file.clone()));
        cells.push(Cell::Text(self.problem_name.clone()));
        cells.push(Cell::Text(self.description.clone()));
        cells.push(Cell::Text(self.difficulty.clone()));
        for language in &self.languages {
            cells.push(Cell::Count(language.pass_count));
            cells.push(Cell::Count(language.fail_count));
        }
        for language in &self.languages {
            cells.push(Cell::Text(language.pass_samples[0].clone()));
            cells.push(Cell::Text(language.pass_samples[1].clone()));
            cells.push(Cell::Text(language.fail_sample.clone()));
        }
        cells
    }
}

impl TableRow for CrossEquivRow {
    fn headers() -> &'static [&'static str] {
        &CROSS_EQUIV_HEADERS
    }

    fn cells(&self) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(CROSS_EQUIV_HEADERS.len());
        cells.push(Cell::Text(self.source.clone()));
        cells.push(Cell::Text(self.problem_name.clone()));
        cells.push(Cell::Text(self.description.clone()));
        for solution in &self.solutions {
            cells.push(Cell::Text(solution.clone()));
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use crate::record::Language;
    use crate::select::LanguageCell;

    use super::*;

    fn full_row() -> FullEquivRow {
        FullEquivRow {
            source: "CODEFORCES".to_string(),
            file: "shard-0".to_string(),
            problem_name: "p".to_string(),
            description: "d".to_string(),
            difficulty: "EASY".to_string(),
            languages: std::array::from_fn(|slot| LanguageCell {
                pass_count: slot + 2,
                fail_count: 1,
                pass_samples: [format!("pass1-{slot}"), format!("pass2-{slot}")],
                fail_sample: format!("fail-{slot}"),
            }),
        }
    }

    #[test]
    fn test_full_equiv_cells_match_headers() {
        let cells = full_row().cells();
        assert_eq!(cells.len(), FullEquivRow::headers().len());
        assert_eq!(cells[0], Cell::Text("CODEFORCES".to_string()));
        assert_eq!(cells[5], Cell::Count(2));
        assert_eq!(cells[6], Cell::Count(1));
        assert_eq!(cells[11], Cell::Text("pass1-0".to_string()));
        assert_eq!(cells[19], Cell::Text("fail-2".to_string()));
    }

    #[test]
    fn test_cross_equiv_cells_match_headers() {
        let row = CrossEquivRow {
            source: "AIZU".to_string(),
            problem_name: "p".to_string(),
            description: String::new(),
            solutions: std::array::from_fn(|slot| format!("solution-{slot}")),
        };
        let cells = row.cells();
        assert_eq!(cells.len(), CrossEquivRow::headers().len());
        assert_eq!(cells[3], Cell::Text("solution-0".to_string()));
        assert_eq!(cells[5], Cell::Text("solution-2".to_string()));
    }

    #[test]
    fn test_language_columns_follow_relevant_order() {
        for (slot, language) in Language::RELEVANT.iter().enumerate() {
            let prefix = language.as_str();
            assert!(FULL_EQUIV_HEADERS[5 + slot * 2].starts_with(prefix));
            assert!(FULL_EQUIV_HEADERS[11 + slot * 3].starts_with(prefix));
            assert!(CROSS_EQUIV_HEADERS[3 + slot].starts_with(prefix));
        }
    }
}
