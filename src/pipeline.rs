//! Pipeline — streams a dump file through the tokenizer and normalizer into
//! a [`RecordSink`].
//!
//! Lines are handled one at a time and independently. The only state carried
//! across lines is the [`RunStats`] counter block, owned by the running
//! [`Pipeline::run`] call.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use mybb_core::config::PipelineConfig;
use mybb_core::{tokenize, Normalizer, SkipReason, UserRecord};
use mybb_export::{ConsoleSink, CsvSink, ExportError, RecordSink};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures that end a run. Per-line problems never show up here.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Export(#[from] ExportError),
}

// ---------------------------------------------------------------------------
// Run state
// ---------------------------------------------------------------------------

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Physical lines read.
    pub lines_read: u64,
    /// Lines that passed the blank / `@` pre-filter.
    pub candidates: u64,
    /// Candidates that produced a record. Progress is keyed on this.
    pub processed: u64,
    /// Records handed to the sink.
    pub valid_users: u64,
}

/// What happened to one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank, or rejected by the `@` pre-filter.
    Filtered,
    Skipped(SkipReason),
    Record(UserRecord),
}

/// Pre-filter and progress settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    pub require_at_sign: bool,
    pub progress_interval: u64,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::from(&PipelineConfig::default())
    }
}

impl From<&PipelineConfig> for PipelineOptions {
    fn from(cfg: &PipelineConfig) -> Self {
        Self {
            require_at_sign: cfg.require_at_sign,
            progress_interval: cfg.progress_interval,
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    normalizer: Normalizer,
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(normalizer: Normalizer, options: PipelineOptions) -> Self {
        Self {
            normalizer,
            options,
        }
    }

    /// Classify a single line. Leading and trailing whitespace is ignored.
    pub fn process_line(&self, line: &str) -> LineOutcome {
        let line = line.trim();
        if line.is_empty() || (self.options.require_at_sign && !line.contains('@')) {
            return LineOutcome::Filtered;
        }

        let Some(fields) = tokenize(line) else {
            return LineOutcome::Skipped(SkipReason::NoMatch);
        };

        match self.normalizer.normalize(&fields) {
            Ok(record) => LineOutcome::Record(record),
            Err(reason) => LineOutcome::Skipped(reason),
        }
    }

    /// Stream every line of `reader` into `sink`, then flush the sink.
    pub fn run<R, S>(&self, mut reader: R, sink: &mut S) -> Result<RunStats, ExtractError>
    where
        R: BufRead,
        S: RecordSink + ?Sized,
    {
        let mut stats = RunStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if read_line(&mut reader, &mut buf)? == 0 {
                break;
            }
            stats.lines_read += 1;

            let outcome = self.process_line(&decode_lossy(&buf));
            match outcome {
                LineOutcome::Filtered => {}
                LineOutcome::Skipped(reason) => {
                    stats.candidates += 1;
                    tracing::trace!(line = stats.lines_read, %reason, "skipped");
                }
                LineOutcome::Record(record) => {
                    stats.candidates += 1;
                    stats.processed += 1;
                    stats.valid_users += 1;
                    sink.write_record(&record)?;

                    let every = self.options.progress_interval;
                    if every > 0 && stats.processed % every == 0 {
                        sink.progress(stats.processed, stats.valid_users)?;
                    }
                }
            }
        }

        sink.finish()?;
        tracing::debug!(?stats, "run complete");
        Ok(stats)
    }
}

// ---------------------------------------------------------------------------
// File-level entry points
// ---------------------------------------------------------------------------

/// Fail with [`ExtractError::InputNotFound`] unless `path` is a regular file.
pub fn ensure_input(path: &Path) -> Result<(), ExtractError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ExtractError::InputNotFound(path.to_path_buf()))
    }
}

/// Extract `input` into the CSV file at `output`, or to stdout when `output`
/// is `None`. File handles are closed before returning on every path.
pub fn extract_file(
    pipeline: &Pipeline,
    input: &Path,
    output: Option<&Path>,
) -> Result<RunStats, ExtractError> {
    ensure_input(input)?;
    let reader = BufReader::new(File::open(input)?);
    tracing::info!(input = %input.display(), "reading dump");

    match output {
        Some(path) => {
            let mut sink = CsvSink::create(path)?;
            tracing::info!(output = %path.display(), "writing CSV");
            pipeline.run(reader, &mut sink)
        }
        None => pipeline.run(reader, &mut ConsoleSink::new(io::stdout())),
    }
}

/// Read one line into `buf`, terminator included. `\n`, `\r\n` and a lone
/// `\r` all end a line. Returns the number of bytes read, 0 at end of input.
pub fn read_line<R: BufRead + ?Sized>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<usize> {
    let mut read = 0;
    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if available.is_empty() {
            return Ok(read);
        }

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                let carriage_return = available[end] == b'\r';
                buf.extend_from_slice(&available[..=end]);
                reader.consume(end + 1);
                read += end + 1;

                if carriage_return && reader.fill_buf()?.first() == Some(&b'\n') {
                    buf.push(b'\n');
                    reader.consume(1);
                    read += 1;
                }
                return Ok(read);
            }
            None => {
                let len = available.len();
                buf.extend_from_slice(available);
                reader.consume(len);
                read += len;
            }
        }
    }
}

/// Decode a raw line as UTF-8, dropping invalid byte sequences.
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => Cow::Owned(bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
