//! Output tree.
//!
//! Each [`Element`] owns its children outright; the tree has no sharing
//! and no cycles. It is built bottom-up by the block parser and only read
//! afterwards.

use smallvec::SmallVec;

/// Tags rendered without a body or closing tag.
pub const SELF_CLOSING_TAGS: &[&str] = &["hr", "img"];

/// Heading tags indexed by level - 1.
const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Leaf content of an element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    /// No content.
    #[default]
    None,
    /// Plain text, escaped at render time.
    Text(String),
    /// Pre-built HTML from the inline formatter, written verbatim.
    Html(String),
}

impl Content {
    /// Whether there is anything to write.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(s) | Self::Html(s) => s.is_empty(),
        }
    }
}

/// A node in the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// HTML tag name. Never empty.
    pub tag: &'static str,
    /// Leaf content; ignored when children exist.
    pub content: Content,
    /// Pre-formatted attribute strings such as `href="url"`, in order.
    pub attributes: SmallVec<[String; 2]>,
    /// Child elements, in order.
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: &'static str) -> Self {
        debug_assert!(!tag.is_empty());
        Self {
            tag,
            content: Content::None,
            attributes: SmallVec::new(),
            children: Vec::new(),
        }
    }

    /// Create an element holding plain text.
    pub fn text(tag: &'static str, text: impl Into<String>) -> Self {
        Self::new(tag).with_content(Content::Text(text.into()))
    }

    /// Create an element holding pre-built HTML.
    pub fn html(tag: &'static str, html: impl Into<String>) -> Self {
        Self::new(tag).with_content(Content::Html(html.into()))
    }

    /// Heading element for a level, clamped to 1..=6.
    pub fn heading(level: u8) -> Self {
        let index = level.clamp(1, 6) as usize - 1;
        Self::new(HEADING_TAGS[index])
    }

    /// Replace the content.
    pub fn with_content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    /// Append an attribute string.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Append a child.
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Whether this element renders without body or closing tag.
    pub fn is_self_closing(&self) -> bool {
        SELF_CLOSING_TAGS.contains(&self.tag)
    }
}
