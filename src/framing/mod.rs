//! Output framing: fixed headers, HTML document boilerplate, and the
//! wrappers around rows and diff entries.
//!
//! Everything here is stateless and writes straight to the sink. Cell and
//! diff content handed in is expected to be escaped already; header names
//! and the font family are sanitized here.

use crate::processor::ColumnDescriptor;
use crate::render::escape_html;
use std::io::{self, Write};

/// Header row of the CSV list output.
pub const CSV_LIST_HEADER: [&str; 3] = ["Line", "Column", "DiffValue"];

/// Document title shared by both HTML shapes.
pub const HTML_TITLE: &str = "Diff Results";

/// Heading of the full-table HTML output.
pub const HTML_TABLE_HEADING: &str = "Diff Results (All Rows)";

/// Heading of the list HTML output.
pub const HTML_LIST_HEADING: &str = "Diff Results (Differences Only)";

/// Written before `</body>` when a list run produced no entries.
pub const NO_DIFF_NOTICE: &str = "<p class='no-diff'>No differences found.</p>";

const STYLESHEET: &str = r#"        table { border-collapse: collapse; margin: 20px 0; font-size: 0.9em; }
        th, td { border: 1px solid #ccc; padding: 8px 12px; vertical-align: top; }
        th { background-color: #eeeeee; text-align: left; }
        tbody tr:nth-child(odd) { background-color: #f9f9f9; }
        .diff-entry { border-bottom: 1px solid #ddd; padding: 8px 0; }
        .diff-entry .location { color: #666666; font-size: 0.85em; margin-right: 12px; }
        .no-diff { color: #666666; font-style: italic; }
        .diff-del {
            color: #d32f2f;
            text-decoration: line-through;
            background-color: #ffebee;
        }
        .diff-add {
            color: #388e3c;
            font-weight: bold;
            text-decoration: none;
            background-color: #e8f5e9;
        }
"#;

/// Drop `<` and `>` so a configured font family cannot close the style block.
pub fn sanitize_font_family(font_family: &str) -> String {
    font_family.replace(['<', '>'], "")
}

/// Write everything up to and including the page heading.
pub fn write_html_preamble<W: Write>(w: &mut W, font_family: &str, heading: &str) -> io::Result<()> {
    write!(
        w,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{HTML_TITLE}</title>
    <style>
        body {{ font-family: {}; }}
{STYLESHEET}    </style>
</head>
<body>
    <h1>{}</h1>
"#,
        sanitize_font_family(font_family),
        escape_html(heading)
    )
}

/// Close the body and the document.
pub fn write_html_postamble<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"</body>\n</html>\n")
}

/// Open the table, with a `<thead>` only when header names exist, and
/// start the body section.
pub fn write_table_open<W: Write>(w: &mut W, headers: Option<&[String]>) -> io::Result<()> {
    w.write_all(b"    <table>\n")?;
    if let Some(headers) = headers {
        w.write_all(b"<thead>\n<tr>\n")?;
        for name in headers {
            writeln!(w, "    <th>{}</th>", escape_html(name))?;
        }
        w.write_all(b"</tr>\n</thead>\n")?;
    }
    w.write_all(b"<tbody>\n")
}

pub fn write_table_close<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"</tbody>\n    </table>\n")
}

/// One `<tr>` with a `<td>` per already-escaped cell.
pub fn write_table_row<W: Write, S: AsRef<str>>(w: &mut W, cells: &[S]) -> io::Result<()> {
    w.write_all(b"<tr>\n")?;
    for cell in cells {
        writeln!(w, "    <td>{}</td>", cell.as_ref())?;
    }
    w.write_all(b"</tr>\n")
}

/// `(Line L, Col C)` or `(Line L, Col C:Name)` with the name escaped.
pub fn location_label(line: usize, column: &ColumnDescriptor<'_>) -> String {
    match column.name {
        Some(name) => format!("(Line {}, Col {}:{})", line, column.index, escape_html(name)),
        None => format!("(Line {}, Col {})", line, column.index),
    }
}

/// One list entry: location label followed by the rendered diff.
pub fn write_diff_entry<W: Write>(
    w: &mut W,
    line: usize,
    column: &ColumnDescriptor<'_>,
    rendered: &str,
) -> io::Result<()> {
    writeln!(
        w,
        r#"    <div class="diff-entry"><span class="location">{}</span><span class="value">{}</span></div>"#,
        location_label(line, column),
        rendered
    )
}

pub fn write_no_diff_notice<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "    {NO_DIFF_NOTICE}")
}
