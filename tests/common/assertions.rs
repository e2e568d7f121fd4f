//! Domain-specific assertion macros for mybb-extract harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that show the
//! whole record, so it is clear which column went wrong.

use mybb_core::UserRecord;

/// Assert one column of a `UserRecord`.
///
/// ```rust
/// assert_column!(record, last_ip, "10.0.0.1");
/// ```
#[macro_export]
macro_rules! assert_column {
    ($record:expr, $column:ident, $expected:expr) => {{
        let record: &mybb_core::UserRecord = &$record;
        let expected: &str = $expected;
        if record.$column != expected {
            panic!(
                "assert_column! failed:\n  record.{}\n  expected: {:?}\n  actual:   {:?}\n  record:   {:?}",
                stringify!($column),
                expected,
                record.$column,
                record
            );
        }
    }};
}

/// Build the expected record for one user in a single expression.
pub fn record(
    username: &str,
    email: &str,
    created: (&str, &str),
    last_ip: &str,
    password_hash: &str,
) -> UserRecord {
    UserRecord {
        username: username.to_string(),
        email: email.to_string(),
        created_date: created.0.to_string(),
        created_time: created.1.to_string(),
        last_ip: last_ip.to_string(),
        password_hash: password_hash.to_string(),
    }
}

/// The four records [`super::sample_dump`] must produce, in UTC.
pub fn sample_records() -> Vec<UserRecord> {
    vec![
        record(
            "alice",
            "alice@example.com",
            ("2023-11-14", "22:13:20"),
            "10.0.0.1",
            "hash123",
        ),
        record(
            "bob",
            "bob@example.org",
            ("(invalid)", "(invalid)"),
            "127.0.0.1",
            "$2y$10$abc,def",
        ),
        record(
            "carol",
            "carol@example.net",
            ("2009-02-13", "23:31:30"),
            "(bad hex: 0xZZ)",
            "c0ffee",
        ),
        record(
            "dave",
            "dave@example.com",
            ("1970-01-01", "00:00:00"),
            "192.168.1.20",
            "d4v3",
        ),
    ]
}
