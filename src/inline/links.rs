//! Link and image passes.
//!
//! Handles:
//! - Inline links: `[text](url)`
//! - Images: `![alt](url)`
//!
//! Link text and URL must be non-empty; image alt text may be empty.
//! Neither may contain its own closing bracket. A `[` directly after `!`
//! belongs to an image and never starts a link.

use std::borrow::Cow;

use crate::cursor::Cursor;

use super::substitute;

/// Replace `[text](url)` with `<a href="url">text</a>`.
pub fn links(text: &str) -> Cow<'_, str> {
    substitute(text, b"[", match_link)
}

/// Replace `![alt](url)` with `<img src="url" alt="alt">`.
pub fn images(text: &str) -> Cow<'_, str> {
    substitute(text, b"!", match_image)
}

/// Bracketed label followed by a parenthesized destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Target {
    /// Label content range.
    label: (usize, usize),
    /// Destination content range.
    url: (usize, usize),
    /// End of the whole construct (after `)`).
    end: usize,
}

/// Parse `[label](url)` with `[` at `open`.
fn parse_target(bytes: &[u8], open: usize, allow_empty_label: bool) -> Option<Target> {
    let mut cursor = Cursor::new_at(bytes, open);
    if !cursor.eat(b'[') {
        return None;
    }

    let label_start = cursor.offset();
    let label_len = cursor.find(b']')?;
    if label_len == 0 && !allow_empty_label {
        return None;
    }
    cursor.advance(label_len + 1);
    if !cursor.eat(b'(') {
        return None;
    }

    let url_start = cursor.offset();
    let url_len = cursor.find(b')')?;
    if url_len == 0 {
        return None;
    }
    Some(Target {
        label: (label_start, label_start + label_len),
        url: (url_start, url_start + url_len),
        end: url_start + url_len + 1,
    })
}

fn match_link(text: &str, start: usize) -> Option<(usize, String)> {
    let bytes = text.as_bytes();
    if start > 0 && bytes[start - 1] == b'!' {
        return None;
    }
    let target = parse_target(bytes, start, false)?;
    let html = format!(
        "<a href=\"{}\">{}</a>",
        &text[target.url.0..target.url.1],
        &text[target.label.0..target.label.1]
    );
    Some((target.end, html))
}

fn match_image(text: &str, start: usize) -> Option<(usize, String)> {
    let bytes = text.as_bytes();
    if bytes.get(start + 1) != Some(&b'[') {
        return None;
    }
    let target = parse_target(bytes, start + 1, true)?;
    let html = format!(
        "<img src=\"{}\" alt=\"{}\">",
        &text[target.url.0..target.url.1],
        &text[target.label.0..target.label.1]
    );
    Some((target.end, html))
}
