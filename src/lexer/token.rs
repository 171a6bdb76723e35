//! Token types produced by the lexer.

/// Block-level category of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// ATX header (`# Title`).
    Header {
        /// Header level (1-6), capped for longer `#` runs.
        level: u8,
    },
    /// Bullet list item (`- item`, `* item`, `+ item`).
    ListItem,
    /// Plain paragraph text.
    Paragraph,
    /// Horizontal rule (`---`, `***`, `___`).
    HorizontalRule,
    /// Code fence delimiter (```` ``` ```` with optional language tag).
    CodeFence {
        /// Language tag following the backticks, if any.
        info: Option<String>,
    },
    /// Inline text run. Never produced by the lexer; parsers treat it
    /// like paragraph continuation that contributes no text.
    Text,
    /// Blank or whitespace-only line.
    Newline,
    /// Explicit end marker. Running off the end of a token slice means
    /// the same thing.
    EndOfInput,
}

impl TokenKind {
    /// Whether this kind starts a new block and ends a running paragraph.
    #[inline]
    pub fn is_block_boundary(&self) -> bool {
        matches!(
            self,
            Self::Header { .. } | Self::ListItem | Self::CodeFence { .. } | Self::HorizontalRule
        )
    }
}

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Line category.
    pub kind: TokenKind,
    /// Normalized payload: header text without `#`, item text without
    /// its marker, empty for rules, the untouched line otherwise.
    pub value: String,
    /// 1-based source line number.
    pub line: usize,
    /// The source line exactly as read.
    pub raw: String,
}

impl Token {
    /// Build a token whose source text is its value.
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize) -> Self {
        let value = value.into();
        Self {
            kind,
            raw: value.clone(),
            value,
            line,
        }
    }

    /// Build a token from a source line and its normalized payload.
    pub fn from_line(kind: TokenKind, value: impl Into<String>, line: usize, raw: &str) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            raw: raw.to_owned(),
        }
    }

    /// The end-of-input marker.
    pub fn end_of_input(line: usize) -> Self {
        Self::new(TokenKind::EndOfInput, String::new(), line)
    }
}
