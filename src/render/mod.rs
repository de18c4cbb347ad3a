//! Edit script renderers.
//!
//! Marker notation mirrors the input grammar (`[-del-]`, `{+ins+}`) and is
//! used for CSV output. Markup notation escapes every segment and wraps
//! edits in `<del>`/`<ins>` elements for HTML output.

use crate::config::OutputMedium;
use crate::engine::{EditScript, SegmentKind};

/// Render a script in the notation that belongs to `medium`.
pub fn render(script: &EditScript, medium: OutputMedium) -> String {
    match medium {
        OutputMedium::Csv => render_marker(script),
        OutputMedium::Html => render_markup(script),
    }
}

/// `equal` verbatim, `delete` as `[-text-]`, `insert` as `{+text+}`.
pub fn render_marker(script: &EditScript) -> String {
    let mut out = String::new();
    for segment in script {
        match segment.kind {
            SegmentKind::Equal => out.push_str(&segment.text),
            SegmentKind::Delete => {
                out.push_str("[-");
                out.push_str(&segment.text);
                out.push_str("-]");
            }
            SegmentKind::Insert => {
                out.push_str("{+");
                out.push_str(&segment.text);
                out.push_str("+}");
            }
        }
    }
    out
}

/// Escaped text, with edits wrapped in `diff-del` / `diff-add` elements.
pub fn render_markup(script: &EditScript) -> String {
    let mut out = String::new();
    for segment in script {
        let text = escape_html(&segment.text);
        match segment.kind {
            SegmentKind::Equal => out.push_str(&text),
            SegmentKind::Delete => {
                out.push_str(r#"<del class="diff-del">"#);
                out.push_str(&text);
                out.push_str("</del>");
            }
            SegmentKind::Insert => {
                out.push_str(r#"<ins class="diff-add">"#);
                out.push_str(&text);
                out.push_str("</ins>");
            }
        }
    }
    out
}

/// Escape `&`, `<`, `>`, `"` and `'` for HTML text and attribute content.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
