//! Tuple tokenizer — splits one `INSERT ... VALUES (...)` line into fields.
//!
//! Tokenizing happens in three steps:
//!
//! 1. [`values_clause`] cuts out the text between `VALUES (` and the `)` that
//!    ends the line (an optional `;` and trailing whitespace may follow).
//! 2. [`split_fields`] walks that text with a two-state quote machine and
//!    splits on commas that are outside single quotes.
//! 3. [`unwrap_quotes`] removes one layer of surrounding `'` from each field.
//!
//! Every field is a slice of the input line, so tokenizing allocates only the
//! field vector.
//!
//! # Limitations
//!
//! Each `'` toggles the quote state. Backslash-escaped (`\'`) and doubled
//! (`''`) quotes are not recognised, so a value such as `'it\'s, fine'` splits
//! in the wrong place. Legacy MyBB exports are read the same way, and output
//! must match them.

use std::sync::OnceLock;

use regex::Regex;

fn values_regex() -> &'static Regex {
    static VALUES: OnceLock<Regex> = OnceLock::new();
    VALUES.get_or_init(|| {
        Regex::new(r"(?is)VALUES\s*\((.*)\);?\s*$").expect("VALUES pattern must compile")
    })
}

/// Quote state of the field scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Unquoted,
    Quoted,
}

impl QuoteState {
    fn toggle(self) -> Self {
        match self {
            QuoteState::Unquoted => QuoteState::Quoted,
            QuoteState::Quoted => QuoteState::Unquoted,
        }
    }
}

/// Tokenize a dump line into its ordered, unquoted field values.
///
/// Returns `None` when the line has no `VALUES(...)` clause; callers skip
/// such lines. Never panics.
///
/// ```
/// let fields = mybb_core::tokenize("INSERT INTO t VALUES (1,'a, b',NULL);").unwrap();
/// assert_eq!(fields, ["1", "a, b", "NULL"]);
/// ```
pub fn tokenize(line: &str) -> Option<Vec<&str>> {
    let body = values_clause(line)?;
    Some(split_fields(body).into_iter().map(unwrap_quotes).collect())
}

/// Text inside the outermost `VALUES ( ... )` of `line`, if any.
pub fn values_clause(line: &str) -> Option<&str> {
    values_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Split tuple text on commas outside single quotes. Fields are trimmed but
/// keep their quotes.
///
/// A trailing comma does not produce an empty last field; the remainder after
/// the final separator is only kept when it is non-empty.
pub fn split_fields(body: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut state = QuoteState::Unquoted;
    let mut start = 0;

    // `'` and `,` are ASCII, so byte offsets always land on char boundaries.
    for (i, b) in body.bytes().enumerate() {
        match b {
            b'\'' => state = state.toggle(),
            b',' if state == QuoteState::Unquoted => {
                fields.push(body[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    if start < body.len() {
        fields.push(body[start..].trim());
    }

    fields
}

/// Strip one `'` from each end of a field that is wrapped in single quotes.
/// Anything else (numbers, `NULL`, already-bare text) is returned unchanged.
pub fn unwrap_quotes(field: &str) -> &str {
    if field.len() >= 2 && field.starts_with('\'') && field.ends_with('\'') {
        &field[1..field.len() - 1]
    } else {
        field
    }
}
