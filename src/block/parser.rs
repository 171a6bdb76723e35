//! Block parser implementation.

use crate::element::{Content, Element};
use crate::inline;
use crate::lexer::{Token, TokenKind};
use crate::Options;

/// Block parser state.
///
/// A parser is built for one token slice and consumed by [`parse`](Self::parse),
/// so its cursor never carries over to another run.
pub struct BlockParser<'a> {
    /// Input tokens.
    tokens: &'a [Token],
    /// Index of the next unconsumed token.
    pos: usize,
    /// Rendering options.
    options: Options,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_options(tokens, &Options::default())
    }

    /// Create a new block parser with options.
    pub fn with_options(tokens: &'a [Token], options: &Options) -> Self {
        Self {
            tokens,
            pos: 0,
            options: *options,
        }
    }

    /// Parse all blocks into a `div` root.
    pub fn parse(mut self) -> Element {
        let mut root = Element::new("div");

        while !self.is_at_end() {
            if let Some(block) = self.parse_block() {
                root.push(block);
            }
        }

        log::debug!(
            "parsed {} blocks from {} tokens",
            root.children.len(),
            self.tokens.len()
        );
        root
    }

    /// The token under the cursor. `None` at the end of the slice or at an
    /// explicit end-of-input token.
    #[inline]
    fn peek(&self) -> Option<&'a Token> {
        self.tokens
            .get(self.pos)
            .filter(|token| token.kind != TokenKind::EndOfInput)
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.peek().is_none()
    }

    #[inline]
    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Parse one block at the cursor. Always consumes at least one token.
    fn parse_block(&mut self) -> Option<Element> {
        let token = self.peek()?;

        match &token.kind {
            TokenKind::Header { level } => {
                self.bump();
                Some(with_inline(Element::heading(*level), &token.value))
            }
            TokenKind::ListItem => Some(self.parse_list()),
            TokenKind::CodeFence { info } => {
                self.bump();
                Some(self.parse_code_block(info.as_deref()))
            }
            TokenKind::HorizontalRule => {
                self.bump();
                Some(Element::new("hr"))
            }
            TokenKind::Newline => {
                self.bump();
                None
            }
            TokenKind::Paragraph | TokenKind::Text | TokenKind::EndOfInput => {
                self.parse_paragraph()
            }
        }
    }

    /// Greedily collect consecutive list items into one `ul`.
    fn parse_list(&mut self) -> Element {
        let mut list = Element::new("ul");

        while let Some(token) = self.peek() {
            if token.kind != TokenKind::ListItem {
                break;
            }
            self.bump();
            list.push(with_inline(Element::new("li"), &token.value));
        }

        list
    }

    /// Collect source lines up to the closing fence (or end of input).
    /// The opening fence is already consumed; the closing one is dropped.
    fn parse_code_block(&mut self, info: Option<&str>) -> Element {
        let mut body = String::new();
        let mut first = true;

        while let Some(token) = self.peek() {
            self.bump();
            if matches!(token.kind, TokenKind::CodeFence { .. }) {
                break;
            }
            if !first {
                body.push('\n');
            }
            body.push_str(&token.raw);
            first = false;
        }

        let mut code = Element::text("code", body);
        if let Some(lang) = info.filter(|_| self.options.language_class) {
            code = code.with_attribute(format!("class=\"language-{lang}\""));
        }

        let mut pre = Element::new("pre");
        pre.push(code);
        pre
    }

    /// Join paragraph lines up to the next block boundary with single spaces.
    /// Blank lines inside the run are consumed but add nothing.
    fn parse_paragraph(&mut self) -> Option<Element> {
        let mut text = String::new();

        while let Some(token) = self.peek() {
            if token.kind.is_block_boundary() {
                break;
            }
            if token.kind == TokenKind::Paragraph {
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(&token.value);
            }
            self.bump();
        }

        if text.is_empty() {
            return None;
        }
        Some(with_inline(Element::new("p"), &text))
    }
}

/// Attach formatted text to a block: a `span` child holding the HTML when
/// any inline construct matched, plain text content otherwise.
fn with_inline(mut element: Element, text: &str) -> Element {
    match inline::format(text).into_content() {
        Content::Html(html) => element.push(Element::html("span", html)),
        plain => element.content = plain,
    }
    element
}
