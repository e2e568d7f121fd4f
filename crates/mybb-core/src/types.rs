//! Core types shared by the tokenizer, the normalizer and the sinks.
//!
//! [`UserRecord`] is the only value that leaves the core: one per valid dump
//! line, handed to a sink and then dropped. [`SkipReason`] explains why a line
//! produced no record, and [`FieldError`] covers the per-field failures that
//! the normalizer recovers from with placeholder text.

use serde::Serialize;

/// Placeholder written to both date and time columns when the registration
/// field is not a usable epoch value.
pub const INVALID_TIMESTAMP: &str = "(invalid)";

/// One extracted forum user, ready for display or CSV export.
///
/// All fields are pre-formatted text so the output format stays stable no
/// matter which sink consumes the record. Field order matches the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    /// `YYYY-MM-DD`, or [`INVALID_TIMESTAMP`].
    pub created_date: String,
    /// `HH:MM:SS`, or [`INVALID_TIMESTAMP`].
    pub created_time: String,
    /// Dotted decimal when the dump stored a hex address, otherwise the raw text.
    pub last_ip: String,
    pub password_hash: String,
}

impl UserRecord {
    /// Column values in header order.
    pub fn columns(&self) -> [&str; 6] {
        [
            &self.username,
            &self.email,
            &self.created_date,
            &self.created_time,
            &self.last_ip,
            &self.password_hash,
        ]
    }
}

/// Why a line was skipped without producing a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    /// The line has no `VALUES(...)` clause.
    #[error("no VALUES(...) clause")]
    NoMatch,
    /// The tuple is too short to contain every positional field.
    #[error("tuple has {found} fields, need at least {required}")]
    InsufficientFields { found: usize, required: usize },
}

/// A single field that could not be converted. Never escapes the normalizer;
/// it is replaced by a placeholder in the produced record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("malformed registration timestamp: {0:?}")]
    MalformedTimestamp(String),
    #[error("malformed hex IP: {0:?}")]
    MalformedHexIp(String),
}

impl FieldError {
    /// Placeholder text substituted for the failed field.
    pub fn placeholder(&self) -> String {
        match self {
            FieldError::MalformedTimestamp(_) => INVALID_TIMESTAMP.to_string(),
            FieldError::MalformedHexIp(raw) => format!("(bad hex: {raw})"),
        }
    }
}
