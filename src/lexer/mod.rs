//! Line lexer.
//!
//! Turns an ordered sequence of lines into exactly one token per line.
//! Classification is strictly per line: no lookahead, no backtracking.
//! Blank lines become [`TokenKind::Newline`] before the classifier runs.

mod classify;
mod token;

pub use classify::{classify, is_blank, trim, Category};
pub use token::{Token, TokenKind};

/// Lexer over a sequence of lines.
///
/// Each run owns a fresh lexer; the line counter never outlives the input.
///
/// # Example
/// ```
/// use mdhtml::lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<_> = Lexer::new(["# Title", "", "text"]).map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Header { level: 1 }, TokenKind::Newline, TokenKind::Paragraph]);
/// ```
pub struct Lexer<I> {
    lines: I,
    line: usize,
}

impl<I> Lexer<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    /// Create a lexer over anything yielding lines.
    pub fn new<L>(lines: L) -> Self
    where
        L: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter(),
            line: 0,
        }
    }

    /// Number of lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<I> Iterator for Lexer<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let source = self.lines.next()?;
        self.line += 1;
        Some(lex_line(source.as_ref(), self.line))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lines.size_hint()
    }
}

/// Lex a single line into its token.
pub fn lex_line(source: &str, line: usize) -> Token {
    if is_blank(source) {
        return Token::from_line(TokenKind::Newline, "", line, source);
    }

    let token = match classify(source) {
        Category::Rule => Token::from_line(TokenKind::HorizontalRule, "", line, source),
        Category::Header { level, text } => {
            Token::from_line(TokenKind::Header { level }, text, line, source)
        }
        Category::ListItem { text } => Token::from_line(TokenKind::ListItem, text, line, source),
        Category::CodeFence { info } => Token::from_line(
            TokenKind::CodeFence {
                info: info.map(str::to_owned),
            },
            source,
            line,
            source,
        ),
        Category::Paragraph => Token::from_line(TokenKind::Paragraph, source, line, source),
    };
    log::trace!("line {line}: {:?}", token.kind);
    token
}

/// Tokenize a sequence of lines.
///
/// The result always has exactly as many tokens as there were lines.
pub fn tokenize<L>(lines: L) -> Vec<Token>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    let lexer = Lexer::new(lines);
    let tokens: Vec<Token> = lexer.collect();
    log::debug!("lexed {} lines", tokens.len());
    tokens
}

/// Split text into lines and tokenize them.
///
/// Line terminators (`\n` or `\r\n`) are stripped before lexing.
pub fn tokenize_str(input: &str) -> Vec<Token> {
    tokenize(input.lines())
}
