//! HTML generator.
//!
//! A pure, recursive walk over the element tree. No newlines or
//! indentation are inserted between elements.

use crate::element::{Content, Element};
use crate::escape;

/// HTML output writer over a growing buffer.
///
/// # Example
/// ```
/// use mdhtml::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.open_tag("p", &[]);
/// writer.write_escaped_text("Hello <World>");
/// writer.close_tag("p");
///
/// assert_eq!(writer.into_string(), "<p>Hello &lt;World&gt;</p>");
/// ```
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Write a string without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write text with HTML escaping.
    #[inline]
    pub fn write_escaped_text(&mut self, text: &str) {
        escape::escape_text_into(&mut self.out, text);
    }

    /// Write leaf content: text is escaped, HTML is written verbatim.
    #[inline]
    pub fn write_content(&mut self, content: &Content) {
        match content {
            Content::None => {}
            Content::Text(text) => self.write_escaped_text(text),
            Content::Html(html) => self.write_str(html),
        }
    }

    /// Write opening tag with attributes: `<tag a b>`.
    ///
    /// Attributes are pre-formatted and written verbatim, space separated.
    #[inline]
    pub fn open_tag(&mut self, tag: &str, attributes: &[String]) {
        self.out.push('<');
        self.out.push_str(tag);
        for attribute in attributes {
            self.out.push(' ');
            self.out.push_str(attribute);
        }
        self.out.push('>');
    }

    /// Write closing tag: `</tag>`.
    #[inline]
    pub fn close_tag(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// Write an element and its subtree.
    ///
    /// Self-closing tags get no body and no closing tag, whatever they hold.
    /// Otherwise children win over content.
    pub fn element(&mut self, element: &Element) {
        self.open_tag(element.tag, &element.attributes);
        if element.is_self_closing() {
            return;
        }

        if element.children.is_empty() {
            self.write_content(&element.content);
        } else {
            for child in &element.children {
                self.element(child);
            }
        }

        self.close_tag(element.tag);
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render an element tree to an HTML string.
pub fn render(element: &Element) -> String {
    let mut writer = HtmlWriter::new();
    writer.element(element);
    writer.into_string()
}
