//! Console sink — one labelled block per user.

use std::io::Write;

use mybb_core::UserRecord;

use crate::{ExportError, RecordSink};

/// Width of the dash line that opens every block.
pub const SEPARATOR_WIDTH: usize = 70;

/// Writes each record as a dash line followed by six `Label : value` lines.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordSink for ConsoleSink<W> {
    fn write_record(&mut self, record: &UserRecord) -> Result<(), ExportError> {
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        writeln!(self.out, "Username      : {}", record.username)?;
        writeln!(self.out, "Email         : {}", record.email)?;
        writeln!(self.out, "Created Date  : {}", record.created_date)?;
        writeln!(self.out, "Created Time  : {}", record.created_time)?;
        writeln!(self.out, "Last IP       : {}", record.last_ip)?;
        writeln!(self.out, "Password Hash : {}", record.password_hash)?;
        Ok(())
    }

    fn progress(&mut self, processed: u64, valid_users: u64) -> Result<(), ExportError> {
        writeln!(
            self.out,
            "\nProcessed {processed} lines... ({valid_users} valid users so far)"
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ExportError> {
        self.out.flush()?;
        Ok(())
    }
}
