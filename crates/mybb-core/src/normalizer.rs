//! Normalizer — turns a tokenized tuple into a [`UserRecord`].
//!
//! Columns are picked by position (see [`FieldLayout`]). Two of them are
//! converted on the way:
//!
//! - the registration time, Unix seconds, is split into a `YYYY-MM-DD` date
//!   and an `HH:MM:SS` time in the configured [`Zone`];
//! - the last IP, when stored as `0x`-prefixed hex, becomes dotted decimal.
//!
//! A bad value in either column is replaced by a placeholder. Only a tuple
//! that is too short to hold every column is rejected.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone, Utc};

use crate::layout::FieldLayout;
use crate::types::{FieldError, SkipReason, UserRecord};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

// ---------------------------------------------------------------------------
// Zone
// ---------------------------------------------------------------------------

/// Time zone registration timestamps are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The zone of the running process (`TZ` / system setting).
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    pub fn utc() -> Self {
        Zone::Fixed(Utc.fix())
    }

    /// Render `instant` as a `(date, time)` pair in this zone.
    pub fn split(&self, instant: DateTime<Utc>) -> (String, String) {
        match self {
            Zone::Local => format_pair(instant.with_timezone(&Local)),
            Zone::Fixed(offset) => format_pair(instant.with_timezone(offset)),
        }
    }
}

fn format_pair<Tz>(dt: DateTime<Tz>) -> (String, String)
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    (
        dt.format(DATE_FORMAT).to_string(),
        dt.format(TIME_FORMAT).to_string(),
    )
}

/// A timezone string that is neither `local`, `utc`, nor a `±HH:MM` offset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timezone {0:?}: expected \"local\", \"utc\" or an offset like \"+02:00\"")]
pub struct InvalidZone(pub String);

impl FromStr for Zone {
    type Err = InvalidZone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(Zone::Local);
        }
        if s.eq_ignore_ascii_case("utc") || s == "Z" {
            return Ok(Zone::utc());
        }
        s.parse::<FixedOffset>()
            .map(Zone::Fixed)
            .map_err(|_| InvalidZone(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Field conversions
// ---------------------------------------------------------------------------

/// Split a Unix-seconds registration value into `(date, time)` in `zone`.
///
/// Fractional seconds are truncated toward zero. Non-numeric, non-finite and
/// out-of-range values are rejected.
pub fn split_timestamp(raw: &str, zone: Zone) -> Result<(String, String), FieldError> {
    let malformed = || FieldError::MalformedTimestamp(raw.to_string());

    let secs: f64 = raw.trim().parse().map_err(|_| malformed())?;
    if !secs.is_finite() {
        return Err(malformed());
    }

    // `as` saturates; saturated values are then rejected by chrono's range check.
    let instant = DateTime::from_timestamp(secs.trunc() as i64, 0).ok_or_else(malformed)?;
    Ok(zone.split(instant))
}

/// Convert a `0x`-prefixed hex address into dotted decimal.
///
/// Bytes are read big-endian, two hex digits each, and any number of bytes is
/// accepted (`0x7F000001` → `127.0.0.1`, bare `0x` → empty). Values without
/// the prefix are returned as they are.
pub fn dotted_ip(raw: &str) -> Result<Cow<'_, str>, FieldError> {
    let Some(digits) = strip_hex_prefix(raw) else {
        return Ok(Cow::Borrowed(raw));
    };

    match hex::decode(digits) {
        Ok(bytes) => Ok(Cow::Owned(
            bytes
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join("."),
        )),
        Err(_) => Err(FieldError::MalformedHexIp(raw.to_string())),
    }
}

fn strip_hex_prefix(raw: &str) -> Option<&str> {
    raw.get(..2)
        .filter(|prefix| prefix.eq_ignore_ascii_case("0x"))
        .map(|_| &raw[2..])
}

fn recover(err: FieldError) -> String {
    tracing::trace!(error = %err, "substituting placeholder");
    err.placeholder()
}

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

/// Builds [`UserRecord`]s from tokenized tuples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    layout: FieldLayout,
    zone: Zone,
}

impl Normalizer {
    pub fn new(layout: FieldLayout, zone: Zone) -> Self {
        Self { layout, zone }
    }

    pub fn layout(&self) -> FieldLayout {
        self.layout
    }

    /// Normalize one tuple. Fails only when the tuple is shorter than
    /// [`FieldLayout::min_fields`].
    pub fn normalize<S: AsRef<str>>(&self, fields: &[S]) -> Result<UserRecord, SkipReason> {
        let required = self.layout.min_fields();
        if fields.len() < required {
            return Err(SkipReason::InsufficientFields {
                found: fields.len(),
                required,
            });
        }

        let field = move |i: usize| fields[i].as_ref();

        let (created_date, created_time) = split_timestamp(field(self.layout.registered), self.zone)
            .unwrap_or_else(|err| {
                let placeholder = recover(err);
                (placeholder.clone(), placeholder)
            });

        let last_ip = match dotted_ip(field(self.layout.last_ip)) {
            Ok(ip) => ip.into_owned(),
            Err(err) => recover(err),
        };

        Ok(UserRecord {
            username: field(self.layout.username).to_string(),
            email: field(self.layout.email).to_string(),
            created_date,
            created_time,
            last_ip,
            password_hash: field(self.layout.password_hash).to_string(),
        })
    }
}

/// Normalize with the stock MyBB layout in the local time zone.
pub fn normalize<S: AsRef<str>>(fields: &[S]) -> Result<UserRecord, SkipReason> {
    Normalizer::default().normalize(fields)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
