//! Row processing: marker detection, diffing and rendering for one record.
//!
//! Full shape maps every cell to its output form. List shape yields one
//! [`DiffEntry`] per marker cell and nothing for other cells.

use crate::config::OutputMedium;
use crate::engine::DiffEngine;
use crate::marker::MarkerGrammar;
use crate::render::{escape_html, render};
use std::fmt;

#[cfg(test)]
mod tests;

/// 1-based column index, labelled with a header name when one covers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor<'h> {
    pub index: usize,
    pub name: Option<&'h str>,
}

impl<'h> ColumnDescriptor<'h> {
    /// Describe the 0-based column `position`. Header lists shorter than
    /// the record simply leave the extra columns unnamed.
    pub fn for_position(position: usize, headers: Option<&'h [String]>) -> Self {
        Self {
            index: position + 1,
            name: headers.and_then(|h| h.get(position)).map(String::as_str),
        }
    }
}

impl fmt::Display for ColumnDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "{}:{}", self.index, name),
            None => write!(f, "{}", self.index),
        }
    }
}

/// One diff cell found in list shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry<'h> {
    /// 1-based record number.
    pub line: usize,
    pub column: ColumnDescriptor<'h>,
    /// Diff rendered for the active medium.
    pub value: String,
}

/// Output cells of a full-shape row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullRow {
    pub cells: Vec<String>,
    /// How many of the cells were marker cells.
    pub diff_cells: usize,
}

/// Applies grammar, engine and renderer to records.
///
/// Borrows one grammar and one engine for the whole run.
pub struct RowProcessor<'a, E: DiffEngine + ?Sized> {
    grammar: &'a MarkerGrammar,
    engine: &'a E,
    medium: OutputMedium,
}

impl<E: DiffEngine + ?Sized> fmt::Debug for RowProcessor<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowProcessor")
            .field("grammar", &self.grammar)
            .field("medium", &self.medium)
            .finish_non_exhaustive()
    }
}

impl<'a, E: DiffEngine + ?Sized> RowProcessor<'a, E> {
    pub fn new(grammar: &'a MarkerGrammar, engine: &'a E, medium: OutputMedium) -> Self {
        Self {
            grammar,
            engine,
            medium,
        }
    }

    /// Rendered diff for a marker cell, `None` for any other cell.
    pub fn render_cell(&self, cell: &str) -> Option<String> {
        let marker = self.grammar.parse(cell)?;
        let script = self.engine.diff(marker.old, marker.new);
        Some(render(&script, self.medium))
    }

    /// Non-marker cells pass through, escaped when the medium is HTML.
    fn plain_cell(&self, cell: &str) -> String {
        match self.medium {
            OutputMedium::Csv => cell.to_string(),
            OutputMedium::Html => escape_html(cell),
        }
    }

    /// Full-shape row: same column count, marker cells replaced.
    pub fn full_row<'r>(&self, cells: impl IntoIterator<Item = &'r str>) -> FullRow {
        let mut diff_cells = 0;
        let cells = cells
            .into_iter()
            .map(|cell| match self.render_cell(cell) {
                Some(rendered) => {
                    diff_cells += 1;
                    rendered
                }
                None => self.plain_cell(cell),
            })
            .collect();
        FullRow { cells, diff_cells }
    }

    /// List-shape entries for record `line`, produced lazily in column order.
    pub fn diff_entries<'r, 'h>(
        &self,
        line: usize,
        cells: impl IntoIterator<Item = &'r str>,
        headers: Option<&'h [String]>,
    ) -> impl Iterator<Item = DiffEntry<'h>> {
        cells
            .into_iter()
            .enumerate()
            .filter_map(move |(position, cell)| {
                let value = self.render_cell(cell)?;
                Some(DiffEntry {
                    line,
                    column: ColumnDescriptor::for_position(position, headers),
                    value,
                })
            })
    }
}
