//! Code span pass.
//!
//! A span is a single backtick, at least one non-backtick character, and
//! the next backtick. Content is copied as is.

use std::borrow::Cow;

use memchr::memchr;

use super::substitute;

/// Replace `` `x` `` with `<code>x</code>`.
pub fn code_spans(text: &str) -> Cow<'_, str> {
    substitute(text, b"`", match_code_span)
}

fn match_code_span(text: &str, start: usize) -> Option<(usize, String)> {
    let bytes = text.as_bytes();
    let content_start = start + 1;
    let close = content_start + memchr(b'`', bytes.get(content_start..)?)?;
    if close == content_start {
        return None;
    }
    let html = format!("<code>{}</code>", &text[content_start..close]);
    Some((close + 1, html))
}
