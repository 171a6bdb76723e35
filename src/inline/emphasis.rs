//! Bold and italic passes.
//!
//! Both use the shortest span: the first closing delimiter that leaves
//! non-empty content wins. Spans never cross a line break.

use std::borrow::Cow;

use memchr::{memchr, memmem};

use super::{line_end, substitute};

/// Replace `**x**` with `<strong>x</strong>`.
pub fn bold(text: &str) -> Cow<'_, str> {
    substitute(text, b"*", match_bold)
}

/// Replace `*x*` and `_x_` with `<em>x</em>`.
pub fn italic(text: &str) -> Cow<'_, str> {
    substitute(text, b"*_", match_italic)
}

fn match_bold(text: &str, start: usize) -> Option<(usize, String)> {
    let bytes = text.as_bytes();
    if bytes.get(start + 1) != Some(&b'*') {
        return None;
    }
    let content_start = start + 2;
    if content_start >= bytes.len() {
        return None;
    }
    let limit = line_end(bytes, content_start);
    // Content is at least one byte, so the closer search starts one past it.
    let search_from = content_start + 1;
    if search_from > limit {
        return None;
    }
    let close = search_from + memmem::find(&bytes[search_from..limit], b"**")?;
    let html = format!("<strong>{}</strong>", &text[content_start..close]);
    Some((close + 2, html))
}

fn match_italic(text: &str, start: usize) -> Option<(usize, String)> {
    let bytes = text.as_bytes();
    let marker = bytes[start];
    let content_start = start + 1;
    if content_start >= bytes.len() {
        return None;
    }
    let limit = line_end(bytes, content_start);
    let search_from = content_start + 1;
    if search_from > limit {
        return None;
    }
    let close = search_from + memchr(marker, &bytes[search_from..limit])?;
    let html = format!("<em>{}</em>", &text[content_start..close]);
    Some((close + 1, html))
}
