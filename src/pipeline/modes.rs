//! The four output modes driven by the pipeline loop.
//!
//! Each mode owns the sink and differs only in what it writes before the
//! first record, for each record, and after the last one.

use crate::engine::DiffEngine;
use crate::framing::{
    write_diff_entry, write_html_postamble, write_html_preamble, write_no_diff_notice,
    write_table_close, write_table_open, write_table_row, CSV_LIST_HEADER, HTML_LIST_HEADING,
    HTML_TABLE_HEADING,
};
use crate::processor::RowProcessor;
use csv::StringRecord;
use std::io::{self, Write};

/// Per-mode rendering hooks used by [`super::drive`].
pub trait OutputMode {
    /// Write whatever precedes the first record.
    fn begin(&mut self) -> io::Result<()>;

    /// Write the output for record `line`; returns how many diff cells it had.
    fn record<E: DiffEngine + ?Sized>(
        &mut self,
        line: usize,
        record: &StringRecord,
        processor: &RowProcessor<'_, E>,
    ) -> io::Result<usize>;

    /// Write the closing output and flush.
    fn finish(&mut self) -> io::Result<()>;

    /// Push buffered output to the sink without closing anything.
    fn flush(&mut self) -> io::Result<()>;
}

/// Build the CSV writer used by both CSV modes. Ragged rows are allowed.
pub fn csv_writer<W: Write>(output: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().flexible(true).from_writer(output)
}

/// Every row as CSV; header row only when names were given.
#[derive(Debug)]
pub struct CsvTable<'h, W: Write> {
    writer: csv::Writer<W>,
    headers: Option<&'h [String]>,
}

impl<'h, W: Write> CsvTable<'h, W> {
    pub fn new(output: W, headers: Option<&'h [String]>) -> Self {
        Self {
            writer: csv_writer(output),
            headers,
        }
    }
}

impl<W: Write> OutputMode for CsvTable<'_, W> {
    fn begin(&mut self) -> io::Result<()> {
        if let Some(headers) = self.headers {
            self.writer.write_record(headers)?;
        }
        Ok(())
    }

    fn record<E: DiffEngine + ?Sized>(
        &mut self,
        _line: usize,
        record: &StringRecord,
        processor: &RowProcessor<'_, E>,
    ) -> io::Result<usize> {
        let row = processor.full_row(record.iter());
        self.writer.write_record(&row.cells)?;
        Ok(row.diff_cells)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// `Line,Column,DiffValue` rows, one per diff cell.
#[derive(Debug)]
pub struct CsvList<'h, W: Write> {
    writer: csv::Writer<W>,
    headers: Option<&'h [String]>,
}

impl<'h, W: Write> CsvList<'h, W> {
    pub fn new(output: W, headers: Option<&'h [String]>) -> Self {
        Self {
            writer: csv_writer(output),
            headers,
        }
    }
}

impl<W: Write> OutputMode for CsvList<'_, W> {
    fn begin(&mut self) -> io::Result<()> {
        self.writer.write_record(CSV_LIST_HEADER)?;
        Ok(())
    }

    fn record<E: DiffEngine + ?Sized>(
        &mut self,
        line: usize,
        record: &StringRecord,
        processor: &RowProcessor<'_, E>,
    ) -> io::Result<usize> {
        let mut written = 0;
        for entry in processor.diff_entries(line, record.iter(), self.headers) {
            self.writer.write_record([
                entry.line.to_string(),
                entry.column.to_string(),
                entry.value,
            ])?;
            written += 1;
        }
        Ok(written)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// A complete HTML document with one table row per record.
#[derive(Debug)]
pub struct HtmlTable<'h, W: Write> {
    out: W,
    headers: Option<&'h [String]>,
    font_family: &'h str,
}

impl<'h, W: Write> HtmlTable<'h, W> {
    pub fn new(out: W, headers: Option<&'h [String]>, font_family: &'h str) -> Self {
        Self {
            out,
            headers,
            font_family,
        }
    }
}

impl<W: Write> OutputMode for HtmlTable<'_, W> {
    fn begin(&mut self) -> io::Result<()> {
        write_html_preamble(&mut self.out, self.font_family, HTML_TABLE_HEADING)?;
        write_table_open(&mut self.out, self.headers)
    }

    fn record<E: DiffEngine + ?Sized>(
        &mut self,
        _line: usize,
        record: &StringRecord,
        processor: &RowProcessor<'_, E>,
    ) -> io::Result<usize> {
        let row = processor.full_row(record.iter());
        write_table_row(&mut self.out, row.cells.as_slice())?;
        Ok(row.diff_cells)
    }

    fn finish(&mut self) -> io::Result<()> {
        write_table_close(&mut self.out)?;
        write_html_postamble(&mut self.out)?;
        self.out.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// A complete HTML document listing each diff cell with its location.
#[derive(Debug)]
pub struct HtmlList<'h, W: Write> {
    out: W,
    headers: Option<&'h [String]>,
    font_family: &'h str,
    entries: usize,
}

impl<'h, W: Write> HtmlList<'h, W> {
    pub fn new(out: W, headers: Option<&'h [String]>, font_family: &'h str) -> Self {
        Self {
            out,
            headers,
            font_family,
            entries: 0,
        }
    }
}

impl<W: Write> OutputMode for HtmlList<'_, W> {
    fn begin(&mut self) -> io::Result<()> {
        write_html_preamble(&mut self.out, self.font_family, HTML_LIST_HEADING)
    }

    fn record<E: DiffEngine + ?Sized>(
        &mut self,
        line: usize,
        record: &StringRecord,
        processor: &RowProcessor<'_, E>,
    ) -> io::Result<usize> {
        let mut written = 0;
        for entry in processor.diff_entries(line, record.iter(), self.headers) {
            write_diff_entry(&mut self.out, entry.line, &entry.column, &entry.value)?;
            written += 1;
        }
        self.entries += written;
        Ok(written)
    }

    fn finish(&mut self) -> io::Result<()> {
        if self.entries == 0 {
            write_no_diff_notice(&mut self.out)?;
        }
        write_html_postamble(&mut self.out)?;
        self.out.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
