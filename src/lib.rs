//! mdhtml: line-oriented Markdown to HTML transpiler
//!
//! Converts a small Markdown dialect to HTML in three stages:
//! 1. Lexing: each input line becomes exactly one [`Token`]
//! 2. Parsing: tokens become a tree of [`Element`]s rooted at a `div`
//! 3. Rendering: the tree is serialized to an HTML string
//!
//! The dialect covers ATX headers, flat bullet lists, fenced code blocks,
//! horizontal rules and paragraphs, with bold, italic, code span, link and
//! image formatting inside headers, list items and paragraphs.
//!
//! # Design Principles
//! - Per-line classification: no lookahead across lines
//! - Infallible core: unrecognized input degrades to paragraph text
//! - No shared state: every run builds fresh lexer and parser instances
//!
//! # Known limitation
//! Inline formatting produces raw HTML and text around matched
//! constructs is not escaped. Untrusted input can therefore inject
//! markup through formatted runs.

pub mod block;
pub mod cursor;
pub mod document;
pub mod element;
pub mod error;
pub mod escape;
pub mod inline;
pub mod io;
pub mod lexer;
pub mod limits;
pub mod render;

// Re-export primary types
pub use block::{parse, BlockParser};
pub use document::{wrap, DocumentOptions};
pub use element::{Content, Element};
pub use error::{Error, Result};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use render::{render, HtmlWriter};

/// Parsing/rendering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Emit `class="language-<tag>"` on code blocks whose opening fence
    /// names a language.
    pub language_class: bool,
}

/// Convert Markdown text to an HTML fragment.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = mdhtml::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<div><h1>Hello</h1><p>World</p></div>");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown text to an HTML fragment with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    lines_to_html(input.lines(), options)
}

/// Convert already-split, newline-stripped lines to an HTML fragment.
pub fn lines_to_html<L>(lines: L, options: &Options) -> String
where
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    let tokens = tokenize(lines);
    let root = block::parse_with_options(&tokens, options);
    render(&root)
}
