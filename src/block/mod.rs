//! Block-level parser.
//!
//! The block parser walks the token stream once and handles:
//! - Headers
//! - Bullet lists (flat, no nesting)
//! - Fenced code blocks
//! - Horizontal rules
//! - Paragraphs

mod parser;

pub use parser::BlockParser;

use crate::element::Element;
use crate::lexer::Token;
use crate::Options;

/// Parse tokens into a tree rooted at a `div`.
pub fn parse(tokens: &[Token]) -> Element {
    BlockParser::new(tokens).parse()
}

/// Parse tokens with options.
pub fn parse_with_options(tokens: &[Token], options: &Options) -> Element {
    BlockParser::with_options(tokens, options).parse()
}
