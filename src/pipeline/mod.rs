//! Streaming pipeline: read a record, process it, write it, repeat.
//!
//! One loop ([`drive`]) serves all four output modes. It stops at end of
//! input or once the line cap is reached, and aborts on the first read or
//! write failure. Output already written stays written.

mod modes;


pub use modes::{csv_writer, CsvList, CsvTable, HtmlList, HtmlTable, OutputMode};

use crate::config::{OutputMedium, OutputShape, RunConfig};
use crate::engine::DiffEngine;
use crate::error::{CellDiffError, Result};
use crate::marker::MarkerGrammar;
use crate::processor::RowProcessor;
use csv::StringRecord;
use std::io::{Read, Write};
use tracing::{debug, info, trace, warn};

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records read and processed.
    pub records: usize,
    /// Marker cells found across those records.
    pub diff_cells: usize,
    /// Whether the run stopped because of the line cap.
    pub limit_reached: bool,
}

/// Build the CSV reader for the input. No header row, ragged rows allowed.
pub fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input)
}

/// Run the mode selected by `config` from `input` to `output`.
///
/// `output` should be buffered by the caller; it is flushed before this
/// returns `Ok`.
pub fn run<R, W, E>(config: &RunConfig, input: R, output: W, engine: &E) -> Result<RunSummary>
where
    R: Read,
    W: Write,
    E: DiffEngine + ?Sized,
{
    let grammar = MarkerGrammar::new();
    let processor = RowProcessor::new(&grammar, engine, config.medium);
    let mut reader = csv_reader(input);
    let headers = config.header_names();
    let font = config.font_family.as_str();
    let limit = config.line_limit;

    info!(
        shape = %config.shape,
        medium = %config.medium,
        line_limit = limit,
        headers = headers.map_or(0, <[String]>::len),
        "starting diff highlighting"
    );

    let summary = match (config.shape, config.medium) {
        (OutputShape::Full, OutputMedium::Csv) => {
            drive(CsvTable::new(output, headers), &mut reader, &processor, limit)
        }
        (OutputShape::Full, OutputMedium::Html) => drive(
            HtmlTable::new(output, headers, font),
            &mut reader,
            &processor,
            limit,
        ),
        (OutputShape::List, OutputMedium::Csv) => {
            drive(CsvList::new(output, headers), &mut reader, &processor, limit)
        }
        (OutputShape::List, OutputMedium::Html) => drive(
            HtmlList::new(output, headers, font),
            &mut reader,
            &processor,
            limit,
        ),
    }?;

    info!(
        records = summary.records,
        diff_cells = summary.diff_cells,
        limit_reached = summary.limit_reached,
        "diff highlighting finished"
    );
    Ok(summary)
}

/// The shared read/cap/count loop. A `limit` of 0 means no cap.
pub fn drive<M, R, E>(
    mut mode: M,
    reader: &mut csv::Reader<R>,
    processor: &RowProcessor<'_, E>,
    limit: usize,
) -> Result<RunSummary>
where
    M: OutputMode,
    R: Read,
    E: DiffEngine + ?Sized,
{
    let mut summary = RunSummary::default();
    let mut record = StringRecord::new();

    mode.begin().map_err(|e| CellDiffError::write(0, e))?;

    loop {
        if limit > 0 && summary.records >= limit {
            debug!(limit, "line limit reached");
            summary.limit_reached = true;
            break;
        }

        let line = summary.records + 1;
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(source) => {
                // Keep what was already produced; the read error still wins.
                if let Err(e) = mode.flush() {
                    warn!(error = %e, "failed to flush partial output");
                }
                return Err(CellDiffError::ReadError { line, source });
            }
        }
        summary.records = line;

        let diff_cells = mode
            .record(line, &record, processor)
            .map_err(|e| CellDiffError::write(line, e))?;
        trace!(line, fields = record.len(), diff_cells, "record processed");
        summary.diff_cells += diff_cells;
    }

    mode.finish().map_err(|e| CellDiffError::write(0, e))?;
    Ok(summary)
}
