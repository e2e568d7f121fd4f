//! mybb-extract — pull user accounts out of MyBB SQL dumps.
//!
//! The tokenizer and normalizer live in [`mybb_core`]; the console and CSV
//! sinks in [`mybb_export`]. This crate wires them into a line pipeline and
//! exposes it to the binary and to the integration harnesses.
//!
//! # Architecture
//!
//! ```text
//! dump file ──► Pipeline ──► tokenize ──► normalize ──► RecordSink
//!                  │                                    ├─► ConsoleSink
//!                  └── RunStats                         └─► CsvSink
//! ```
//!
//! Everything runs on one thread, one line at a time.

pub mod pipeline;
pub mod report;

pub use mybb_core::{tokenize, FieldLayout, Normalizer, SkipReason, UserRecord, Zone};
pub use mybb_export::{ConsoleSink, CsvSink, RecordSink};
pub use pipeline::{extract_file, ExtractError, LineOutcome, Pipeline, PipelineOptions, RunStats};
