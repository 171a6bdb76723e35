//! Inline formatter.
//!
//! Runs five substitution passes in a fixed order, each over the output
//! of the previous one:
//! 1. Bold `**x**`
//! 2. Italic `*x*` and `_x_`
//! 3. Code spans `` `x` ``
//! 4. Links `[text](url)`
//! 5. Images `![alt](url)`
//!
//! Each pass replaces all non-overlapping occurrences, leftmost first,
//! using the shortest closing delimiter. Substituted HTML is never
//! rescanned by the same pass.
//!
//! The output is raw HTML. Text outside matched constructs is not
//! escaped, so `<`, `>` and `&` in formatted runs reach the output as
//! written.

mod code_span;
mod emphasis;
mod links;

use std::borrow::Cow;

use memchr::{memchr, memchr2};

use crate::element::Content;

pub use code_span::code_spans;
pub use emphasis::{bold, italic};
pub use links::{images, links};

/// Result of formatting a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    /// The transformed text; raw HTML when `changed` is true.
    pub html: String,
    /// Whether any substitution applied.
    pub changed: bool,
}

impl Formatted {
    /// Leaf content for the formatted run: verbatim HTML when something
    /// was substituted, escapable plain text otherwise.
    pub fn into_content(self) -> Content {
        if self.changed {
            Content::Html(self.html)
        } else {
            Content::Text(self.html)
        }
    }
}

/// Format a run of text.
///
/// # Example
/// ```
/// let out = mdhtml::inline::format("**a** and **b**");
/// assert_eq!(out.html, "<strong>a</strong> and <strong>b</strong>");
/// assert!(out.changed);
/// ```
pub fn format(text: &str) -> Formatted {
    let out = bold(text);
    let out = italic(&out);
    let out = code_spans(&out);
    let out = links(&out);
    let out = images(&out).into_owned();

    let changed = out != text;
    Formatted { html: out, changed }
}

/// A pass matcher: given the text and a trigger position, return the end
/// of the match and its replacement.
type Matcher = fn(&str, usize) -> Option<(usize, String)>;

/// Replace every match of `matcher`, scanning left to right from positions
/// holding one of `triggers`. A failed attempt resumes one byte later.
fn substitute<'a>(text: &'a str, triggers: &[u8], matcher: Matcher) -> Cow<'a, str> {
    let bytes = text.as_bytes();
    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut pos = 0;

    while let Some(found) = find_trigger(&bytes[pos..], triggers) {
        let start = pos + found;
        match matcher(text, start) {
            Some((end, replacement)) => {
                let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 16));
                buf.push_str(&text[copied..start]);
                buf.push_str(&replacement);
                copied = end;
                pos = end;
            }
            None => pos = start + 1,
        }
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(text),
    }
}

#[inline]
fn find_trigger(haystack: &[u8], triggers: &[u8]) -> Option<usize> {
    match *triggers {
        [a] => memchr(a, haystack),
        [a, b] => memchr2(a, b, haystack),
        _ => haystack.iter().position(|b| triggers.contains(b)),
    }
}

/// End of the current line starting at `from`: the first `\n` or `\r`, or
/// the end of text. Emphasis spans never cross it.
#[inline]
fn line_end(bytes: &[u8], from: usize) -> usize {
    memchr2(b'\n', b'\r', &bytes[from..]).map_or(bytes.len(), |p| from + p)
}
