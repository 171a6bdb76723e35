//! Standalone HTML document shell.
//!
//! Wraps a rendered body fragment in a complete page with a title and an
//! optional embedded stylesheet.

use html_escape::{encode_double_quoted_attribute, encode_text};

/// Page title used when none is given.
pub const DEFAULT_TITLE: &str = "Generated from Markdown";

/// Stylesheet embedded by default.
pub const DEFAULT_STYLESHEET: &str = "\
body { font-family: Arial, sans-serif; line-height: 1.6; margin: 40px; }
h1, h2, h3, h4, h5, h6 { color: #333; }
code { background-color: #f4f4f4; padding: 2px 4px; border-radius: 3px; }
pre { background-color: #f4f4f4; padding: 10px; border-radius: 5px; overflow-x: auto; }
ul, ol { padding-left: 20px; }
hr { border: none; border-top: 1px solid #ccc; margin: 20px 0; }";

/// Options for the document shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Text of the `<title>` element. Escaped on output.
    pub title: String,
    /// Value of the `lang` attribute on `<html>`.
    pub lang: String,
    /// CSS embedded in a `<style>` element; `None` omits the element.
    pub stylesheet: Option<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            lang: "en".to_owned(),
            stylesheet: Some(DEFAULT_STYLESHEET.to_owned()),
        }
    }
}

/// Wrap a body fragment in a full HTML document.
pub fn wrap(body: &str, options: &DocumentOptions) -> String {
    let mut out = String::with_capacity(body.len() + 1024);

    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!(
        "<html lang=\"{}\">\n",
        encode_double_quoted_attribute(&options.lang)
    ));
    out.push_str("<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    out.push_str(&format!("    <title>{}</title>\n", encode_text(&options.title)));

    if let Some(css) = &options.stylesheet {
        out.push_str("    <style>\n");
        for line in css.lines() {
            out.push_str("        ");
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("    </style>\n");
    }

    out.push_str("</head>\n");
    out.push_str("<body>\n");
    out.push_str(body);
    out.push('\n');
    out.push_str("</body>\n");
    out.push_str("</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_default() {
        let page = wrap("<div></div>", &DocumentOptions::default());
        assert!(page.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n"));
        assert!(page.contains("    <title>Generated from Markdown</title>\n"));
        assert!(page.contains("        hr { border: none;"));
        assert!(page.ends_with("<body>\n<div></div>\n</body>\n</html>\n"));
    }

    #[test]
    fn test_wrap_without_style() {
        let options = DocumentOptions {
            stylesheet: None,
            ..DocumentOptions::default()
        };
        let page = wrap("", &options);
        assert!(!page.contains("<style>"));
    }

    #[test]
    fn test_title_escaped() {
        let options = DocumentOptions {
            title: "Fish & <Chips>".into(),
            ..DocumentOptions::default()
        };
        let page = wrap("", &options);
        assert!(page.contains("<title>Fish &amp; &lt;Chips&gt;</title>"));
    }
}
