//! CSV sink — fully quoted rows under a fixed six-column header.
//!
//! Rows end in `\r\n` and every field is quoted, which is what spreadsheet
//! imports of earlier extractions expect.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use mybb_core::UserRecord;

use crate::{ExportError, RecordSink};

/// Header row, in [`UserRecord::columns`] order.
pub const CSV_HEADER: [&str; 6] = [
    "Username",
    "Email",
    "Created_Date",
    "Created_Time",
    "Last_IP",
    "Password_Hash",
];

/// Writes records as quoted CSV rows.
pub struct CsvSink<W: Write> {
    writer: Writer<W>,
}

impl CsvSink<BufWriter<File>> {
    /// Create (or truncate) `path` and write the header.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let file = File::create(path.as_ref())?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> CsvSink<W> {
    /// Wrap `out` and write the header row.
    pub fn new(out: W) -> Result<Self, ExportError> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::CRLF)
            .from_writer(out);
        writer.write_record(CSV_HEADER)?;
        Ok(Self { writer })
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W, ExportError> {
        self.writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_record(&mut self, record: &UserRecord) -> Result<(), ExportError> {
        self.writer.write_record(record.columns())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ExportError> {
        self.writer.flush()?;
        Ok(())
    }
}
