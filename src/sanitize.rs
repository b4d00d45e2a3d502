//! Text cleaning for workbook cells.
//!
//! The spreadsheet format rejects most C0 control characters, so every text
//! cell is stripped of them before export. Tab and line feed survive;
//! carriage returns are normalized to line feeds.

use std::sync::LazyLock;

use regex::Regex;

/// Control characters the workbook cannot hold. Excludes `\t` (0x09),
/// `\n` (0x0A) and `\r` (0x0D); carriage returns are handled separately.
static ILLEGAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F]").expect("static pattern"));

/// Strip illegal control characters and normalize line breaks to `\n`.
pub fn clean_text(text: &str) -> String {
    let stripped = ILLEGAL_CHARS.replace_all(text, "");
    stripped.replace("\r\n", "\n").replace('\r', "\n")
}

/// Clean a sampled solution body: [`clean_text`] plus trimming the
/// surrounding whitespace, keeping interior newlines intact.
pub fn clean_code(code: &str) -> String {
    clean_text(code).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_control_characters() {
        assert_eq!(clean_text("a\x00b\x07c\x1fd"), "abcd");
        assert_eq!(clean_text("keep\ttabs\nand newlines"), "keep\ttabs\nand newlines");
    }

    #[test]
    fn test_normalizes_line_breaks() {
        assert_eq!(clean_text("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_clean_text_is_idempotent() {
        let once = clean_text("x\x01y\r\nz\r");
        assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn test_clean_code_trims() {
        assert_eq!(clean_code("  int main() {\n}\n  "), "int main() {\n}");
        assert_eq!(clean_code("\x0b  \x0c"), "");
    }
}
