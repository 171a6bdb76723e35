use mdhtml::{lines_to_html, to_html, Options};

#[test]
fn empty_input_is_empty_div() {
    assert_eq!(to_html(""), "<div></div>");
}

#[test]
fn blank_lines_only() {
    assert_eq!(to_html("\n   \n\t\n"), "<div></div>");
}

#[test]
fn header_levels() {
    assert_eq!(to_html("# One"), "<div><h1>One</h1></div>");
    assert_eq!(to_html("### Three"), "<div><h3>Three</h3></div>");
    assert_eq!(to_html("###### Six"), "<div><h6>Six</h6></div>");
}

#[test]
fn seven_hashes_cap_at_h6() {
    assert_eq!(to_html("####### Text"), "<div><h6>Text</h6></div>");
}

#[test]
fn header_without_space_is_paragraph() {
    assert_eq!(to_html("#tag"), "<div><p>#tag</p></div>");
}

#[test]
fn formatted_header_wraps_span() {
    assert_eq!(
        to_html("## A [link](/x)"),
        "<div><h2><span>A <a href=\"/x\">link</a></span></h2></div>"
    );
}

#[test]
fn bold_paragraph() {
    assert_eq!(
        to_html("Some **bold** text"),
        "<div><p><span>Some <strong>bold</strong> text</span></p></div>"
    );
}

#[test]
fn non_greedy_bold_spans() {
    assert_eq!(
        to_html("**a** and **b**"),
        "<div><p><span><strong>a</strong> and <strong>b</strong></span></p></div>"
    );
}

#[test]
fn list_closes_before_paragraph() {
    assert_eq!(
        to_html("- x\n- y\nz"),
        "<div><ul><li>x</li><li>y</li></ul><p>z</p></div>"
    );
}

#[test]
fn list_markers_mix_in_one_list() {
    assert_eq!(
        to_html("- a\n* b\n+ c"),
        "<div><ul><li>a</li><li>b</li><li>c</li></ul></div>"
    );
}

#[test]
fn formatted_list_item() {
    assert_eq!(
        to_html("- *x*"),
        "<div><ul><li><span><em>x</em></span></li></ul></div>"
    );
}

#[test]
fn code_block_is_verbatim() {
    assert_eq!(
        to_html("```\na*b*\n```"),
        "<div><pre><code>a*b*</code></pre></div>"
    );
}

#[test]
fn code_block_joins_lines() {
    assert_eq!(
        to_html("```\nline 1\n  line 2\n```"),
        "<div><pre><code>line 1\n  line 2</code></pre></div>"
    );
}

#[test]
fn code_block_content_is_escaped() {
    assert_eq!(
        to_html("```html\n<b>\"hi\" & 'bye'</b>\n```"),
        "<div><pre><code>&lt;b&gt;&quot;hi&quot; &amp; &#39;bye&#39;&lt;/b&gt;</code></pre></div>"
    );
}

#[test]
fn code_block_keeps_markdown_lines() {
    assert_eq!(
        to_html("```\n# not a header\n- not a list\n```"),
        "<div><pre><code># not a header\n- not a list</code></pre></div>"
    );
}

#[test]
fn unclosed_code_block_runs_to_end() {
    assert_eq!(
        to_html("```\nfirst\n\n# second"),
        "<div><pre><code>first\n\n# second</code></pre></div>"
    );
}

#[test]
fn horizontal_rules() {
    assert_eq!(to_html("---"), "<div><hr></div>");
    assert_eq!(to_html("***\n___"), "<div><hr><hr></div>");
}

#[test]
fn unmatched_link_is_escaped_text() {
    assert_eq!(to_html("[text](url"), "<div><p>[text](url</p></div>");
}

#[test]
fn plain_text_is_escaped() {
    assert_eq!(
        to_html("a < b & c > \"d\""),
        "<div><p>a &lt; b &amp; c &gt; &quot;d&quot;</p></div>"
    );
}

#[test]
fn formatted_text_is_not_escaped() {
    assert_eq!(
        to_html("**a** < b"),
        "<div><p><span><strong>a</strong> < b</span></p></div>"
    );
}

#[test]
fn paragraph_lines_join_with_spaces() {
    assert_eq!(
        to_html("first line\nsecond line"),
        "<div><p>first line second line</p></div>"
    );
}

#[test]
fn paragraph_continues_across_blank_lines() {
    assert_eq!(to_html("a\n\nb"), "<div><p>a b</p></div>");
}

#[test]
fn paragraph_keeps_leading_whitespace() {
    assert_eq!(to_html("  indented"), "<div><p>  indented</p></div>");
}

#[test]
fn images_render_self_closing() {
    assert_eq!(
        to_html("![logo](logo.png)"),
        "<div><p><span><img src=\"logo.png\" alt=\"logo\"></span></p></div>"
    );
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        to_html("# A\r\nb\r\n"),
        "<div><h1>A</h1><p>b</p></div>"
    );
}

#[test]
fn lines_api_matches_text_api() {
    let lines = vec!["# T".to_string(), String::new(), "- i".to_string()];
    assert_eq!(
        lines_to_html(&lines, &Options::default()),
        to_html("# T\n\n- i")
    );
}

#[test]
fn mixed_document() {
    let input = "# Title

Intro with `code`.

- one
- **two**

---

```rust
let x = 1;
```
Tail text";
    assert_eq!(
        to_html(input),
        concat!(
            "<div>",
            "<h1>Title</h1>",
            "<p><span>Intro with <code>code</code>.</span></p>",
            "<ul><li>one</li><li><span><strong>two</strong></span></li></ul>",
            "<hr>",
            "<pre><code>let x = 1;</code></pre>",
            "<p>Tail text</p>",
            "</div>"
        )
    );
}

#[test]
fn independent_runs_do_not_share_state() {
    let first = to_html("```\nopen fence");
    let second = to_html("plain");
    assert_eq!(first, "<div><pre><code>open fence</code></pre></div>");
    assert_eq!(second, "<div><p>plain</p></div>");
}
