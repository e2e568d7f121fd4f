//! mybb-export — record sinks for mybb-extract.
//!
//! Each sink receives finished [`mybb_core::UserRecord`] values from the
//! pipeline and writes them somewhere: a human-readable console block
//! ([`ConsoleSink`]) or a fully quoted CSV file ([`CsvSink`]).

pub mod console;
pub mod csv_writer;

pub use console::ConsoleSink;
pub use csv_writer::{CsvSink, CSV_HEADER};

use mybb_core::UserRecord;

/// Failure while writing records out.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV write failed: {0}")]
    Csv(#[from] ::csv::Error),
}

/// Destination for extracted records.
pub trait RecordSink {
    /// Write one record.
    fn write_record(&mut self, record: &UserRecord) -> Result<(), ExportError>;

    /// Periodic progress notice. Sinks that own the terminal print it; file
    /// sinks ignore it.
    fn progress(&mut self, _processed: u64, _valid_users: u64) -> Result<(), ExportError> {
        Ok(())
    }

    /// Flush anything buffered. Called once after the last record.
    fn finish(&mut self) -> Result<(), ExportError>;
}
