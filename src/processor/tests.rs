//! Tests for row processing.

use super::{ColumnDescriptor, DiffEntry, RowProcessor};
use crate::config::OutputMedium;
use crate::engine::{CharDiffEngine, DiffEngine, EditScript, Segment};
use crate::marker::MarkerGrammar;
use std::cell::Cell;

const ROW: [&str; 4] = ["1", "Apple", "[-OK-]{+NG+}", "[-Note 1-]{+Note 2+}"];

fn headers() -> Vec<String> {
    ["ID", "Item", "Status", "Memo"].map(String::from).to_vec()
}

/// Engine that replaces wholesale and counts its calls.
#[derive(Default)]
struct CountingEngine {
    calls: Cell<usize>,
}

impl DiffEngine for CountingEngine {
    fn diff(&self, old: &str, new: &str) -> EditScript {
        self.calls.set(self.calls.get() + 1);
        EditScript::from_segments(vec![Segment::delete(old), Segment::insert(new)])
    }
}

#[test]
fn test_full_row_csv_renders_markers_and_keeps_other_cells() {
    let grammar = MarkerGrammar::new();
    let engine = CharDiffEngine::default();
    let processor = RowProcessor::new(&grammar, &engine, OutputMedium::Csv);

    let row = processor.full_row(ROW);
    assert_eq!(row.cells, vec!["1", "Apple", "[-OK-]{+NG+}", "Note [-1-]{+2+}"]);
    assert_eq!(row.diff_cells, 2);
}

#[test]
fn test_full_row_html_escapes_plain_cells() {
    let grammar = MarkerGrammar::new();
    let engine = CharDiffEngine::default();
    let processor = RowProcessor::new(&grammar, &engine, OutputMedium::Html);

    let row = processor.full_row(["a<b", "[-x-]{+<y>+}"]);
    assert_eq!(
        row.cells,
        vec![
            "a&lt;b",
            r#"<del class="diff-del">x</del><ins class="diff-add">&lt;y&gt;</ins>"#,
        ]
    );
}

#[test]
fn test_full_row_keeps_column_count() {
    let grammar = MarkerGrammar::new();
    let engine = CharDiffEngine::default();
    let processor = RowProcessor::new(&grammar, &engine, OutputMedium::Csv);

    assert!(processor.full_row(std::iter::empty::<&str>()).cells.is_empty());
    assert_eq!(processor.full_row(["", "", ""]).cells, vec!["", "", ""]);
}

#[test]
fn test_non_marker_cells_never_reach_engine() {
    let grammar = MarkerGrammar::new();
    let engine = CountingEngine::default();
    let processor = RowProcessor::new(&grammar, &engine, OutputMedium::Csv);

    let row = processor.full_row(["plain", "[-a-]{+b", "x[-a-]{+b+}", "  padded  "]);
    assert_eq!(row.cells, vec!["plain", "[-a-]{+b", "x[-a-]{+b+}", "  padded  "]);
    assert_eq!(row.diff_cells, 0);
    assert_eq!(engine.calls.get(), 0);

    processor.full_row(ROW);
    assert_eq!(engine.calls.get(), 2);
}

#[test]
fn test_diff_entries_without_headers() {
    let grammar = MarkerGrammar::new();
    let engine = CharDiffEngine::default();
    let processor = RowProcessor::new(&grammar, &engine, OutputMedium::Csv);

    let entries: Vec<_> = processor.diff_entries(1, ROW, None).collect();
    assert_eq!(
        entries,
        vec![
            DiffEntry {
                line: 1,
                column: ColumnDescriptor { index: 3, name: None },
                value: "[-OK-]{+NG+}".to_string(),
            },
            DiffEntry {
                line: 1,
                column: ColumnDescriptor { index: 4, name: None },
                value: "Note [-1-]{+2+}".to_string(),
            },
        ]
    );
}

#[test]
fn test_diff_entries_with_headers() {
    let grammar = MarkerGrammar::new();
    let engine = CharDiffEngine::default();
    let processor = RowProcessor::new(&grammar, &engine, OutputMedium::Csv);
    let headers = headers();

    let columns: Vec<String> = processor
        .diff_entries(5, ROW, Some(headers.as_slice()))
        .map(|e| format!("{},{}", e.line, e.column))
        .collect();
    assert_eq!(columns, vec!["5,3:Status", "5,4:Memo"]);
}

#[test]
fn test_diff_entries_skip_plain_rows() {
    let grammar = MarkerGrammar::new();
    let engine = CountingEngine::default();
    let processor = RowProcessor::new(&grammar, &engine, OutputMedium::Csv);

    assert_eq!(processor.diff_entries(2, ["2", "Banana", "OK"], None).count(), 0);
    assert_eq!(engine.calls.get(), 0);
}

#[test]
fn test_column_descriptor_header_coverage() {
    let short = vec!["ID".to_string(), "Item".to_string()];
    let described: Vec<String> = (0..4)
        .map(|p| ColumnDescriptor::for_position(p, Some(short.as_slice())).to_string())
        .collect();
    assert_eq!(described, vec!["1:ID", "2:Item", "3", "4"]);

    assert_eq!(ColumnDescriptor::for_position(0, None).to_string(), "1");
}

#[test]
fn test_render_cell_uses_medium() {
    let grammar = MarkerGrammar::new();
    let engine = CountingEngine::default();

    let csv = RowProcessor::new(&grammar, &engine, OutputMedium::Csv);
    assert_eq!(csv.render_cell(" [-a-]{+b+} ").as_deref(), Some("[-a-]{+b+}"));

    let html = RowProcessor::new(&grammar, &engine, OutputMedium::Html);
    assert_eq!(
        html.render_cell("[-a-]{+b+}").as_deref(),
        Some(r#"<del class="diff-del">a</del><ins class="diff-add">b</ins>"#)
    );
    assert_eq!(html.render_cell("plain"), None);
}
