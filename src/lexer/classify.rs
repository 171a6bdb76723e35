//! Line classification.
//!
//! Rules are tried in a fixed order against the trimmed line:
//! horizontal rule, header, list item, code fence, paragraph.

use crate::cursor::{is_space, Cursor};
use crate::limits::{FENCE_BACKTICKS, MAX_HEADING_LEVEL, MIN_RULE_MARKERS};

/// Category of a non-blank line, borrowing its payload from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category<'a> {
    /// Horizontal rule.
    Rule,
    /// Header with its level and text.
    Header {
        /// Level 1-6.
        level: u8,
        /// Header text, trimmed.
        text: &'a str,
    },
    /// Bullet list item with its text.
    ListItem {
        /// Item text after the marker, trimmed.
        text: &'a str,
    },
    /// Code fence delimiter.
    CodeFence {
        /// Language tag, if any.
        info: Option<&'a str>,
    },
    /// Anything else.
    Paragraph,
}

/// Trim classifier whitespace from both ends.
#[inline]
pub fn trim(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_ascii() && is_space(c as u8))
}

/// Whether a line is empty or whitespace only.
#[inline]
pub fn is_blank(line: &str) -> bool {
    trim(line).is_empty()
}

/// Classify one line. Never fails; unmatched lines are paragraphs.
pub fn classify(line: &str) -> Category<'_> {
    let trimmed = trim(line);

    if is_rule(trimmed) {
        return Category::Rule;
    }
    if let Some((level, text)) = header(trimmed) {
        return Category::Header { level, text };
    }
    if let Some(text) = list_item(trimmed) {
        return Category::ListItem { text };
    }
    if let Some(info) = code_fence(trimmed) {
        return Category::CodeFence { info };
    }
    Category::Paragraph
}

/// A contiguous run of at least three identical `-`, `*` or `_`.
fn is_rule(line: &str) -> bool {
    let bytes = line.as_bytes();
    let marker = match bytes.first() {
        Some(&b @ (b'-' | b'*' | b'_')) => b,
        _ => return false,
    };
    bytes.len() >= MIN_RULE_MARKERS && bytes.iter().all(|&b| b == marker)
}

/// `#` run, whitespace, then non-empty text. Runs longer than six cap at 6.
fn header(line: &str) -> Option<(u8, &str)> {
    let mut cursor = Cursor::new(line.as_bytes());
    let hashes = cursor.count_run(b'#');
    if hashes == 0 || cursor.skip_whitespace() == 0 || cursor.is_eof() {
        return None;
    }
    let level = hashes.min(MAX_HEADING_LEVEL as usize) as u8;
    Some((level, trim(&line[cursor.offset()..])))
}

/// One of `-`, `*`, `+`, whitespace, then non-empty text.
fn list_item(line: &str) -> Option<&str> {
    let mut cursor = Cursor::new(line.as_bytes());
    if !cursor.at_any(b"-*+") {
        return None;
    }
    cursor.bump();
    if cursor.skip_whitespace() == 0 || cursor.is_eof() {
        return None;
    }
    Some(&line[cursor.offset()..])
}

/// Exactly three backticks, optionally followed by a word-character tag.
fn code_fence(line: &str) -> Option<Option<&str>> {
    let mut cursor = Cursor::new(line.as_bytes());
    if cursor.count_run(b'`') != FENCE_BACKTICKS {
        return None;
    }
    let info = cursor.rest();
    if !info.iter().all(|&b| b.is_ascii_alphanumeric() || b == b'_') {
        return None;
    }
    Some((!info.is_empty()).then(|| &line[cursor.offset()..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_markers() {
        assert_eq!(classify("---"), Category::Rule);
        assert_eq!(classify("***"), Category::Rule);
        assert_eq!(classify("___"), Category::Rule);
        assert_eq!(classify("  ----------  "), Category::Rule);
    }

    #[test]
    fn test_rule_too_short() {
        assert_eq!(classify("--"), Category::Paragraph);
    }

    #[test]
    fn test_rule_mixed_markers() {
        assert_eq!(classify("-*-"), Category::Paragraph);
    }

    #[test]
    fn test_rule_with_inner_spaces_is_list_item() {
        assert_eq!(classify("- - -"), Category::ListItem { text: "- -" });
    }

    #[test]
    fn test_header_levels() {
        assert_eq!(classify("# One"), Category::Header { level: 1, text: "One" });
        assert_eq!(classify("### Three"), Category::Header { level: 3, text: "Three" });
        assert_eq!(classify("###### Six"), Category::Header { level: 6, text: "Six" });
    }

    #[test]
    fn test_header_level_capped() {
        assert_eq!(classify("####### Text"), Category::Header { level: 6, text: "Text" });
    }

    #[test]
    fn test_header_requires_space() {
        assert_eq!(classify("#Heading"), Category::Paragraph);
    }

    #[test]
    fn test_header_requires_text() {
        assert_eq!(classify("#"), Category::Paragraph);
        assert_eq!(classify("##   "), Category::Paragraph);
    }

    #[test]
    fn test_header_trims_text() {
        assert_eq!(classify("  ##   Spaced out  "), Category::Header { level: 2, text: "Spaced out" });
    }

    #[test]
    fn test_list_markers() {
        assert_eq!(classify("- dash"), Category::ListItem { text: "dash" });
        assert_eq!(classify("* star"), Category::ListItem { text: "star" });
        assert_eq!(classify("+ plus"), Category::ListItem { text: "plus" });
        assert_eq!(classify("    -   indented"), Category::ListItem { text: "indented" });
    }

    #[test]
    fn test_list_requires_space() {
        assert_eq!(classify("-dash"), Category::Paragraph);
        assert_eq!(classify("**bold** start"), Category::Paragraph);
    }

    #[test]
    fn test_code_fence() {
        assert_eq!(classify("```"), Category::CodeFence { info: None });
        assert_eq!(classify("```js"), Category::CodeFence { info: Some("js") });
        assert_eq!(classify("  ```rust_2024  "), Category::CodeFence { info: Some("rust_2024") });
    }

    #[test]
    fn test_code_fence_rejects_other_shapes() {
        assert_eq!(classify("````"), Category::Paragraph);
        assert_eq!(classify("``"), Category::Paragraph);
        assert_eq!(classify("```rust cargo"), Category::Paragraph);
        assert_eq!(classify("```c++"), Category::Paragraph);
    }

    #[test]
    fn test_rule_beats_list() {
        assert_eq!(classify("***"), Category::Rule);
        assert_eq!(classify("* * *"), Category::ListItem { text: "* *" });
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t \r"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_unicode_text_survives() {
        assert_eq!(classify("# Grüße"), Category::Header { level: 1, text: "Grüße" });
        assert_eq!(classify("Straße"), Category::Paragraph);
    }
}
