//! Test builders — ergonomic constructors for dump lines.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use mybb_core::layout::{
    EMAIL_INDEX, LAST_IP_INDEX, PASSWORD_HASH_INDEX, REGISTERED_INDEX, USERNAME_INDEX,
};

/// Tuple position of the free-text signature filler, which contains commas.
pub const SIGNATURE_INDEX: usize = 3;

// ---------------------------------------------------------------------------
// DumpLineBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for `INSERT INTO mybb_users VALUES (...)` lines.
///
/// Every field holds an SQL literal exactly as it appears in the dump, so
/// string values carry their quotes. The default tuple has 65 fields, a quoted
/// signature containing commas and a `NULL` or two.
///
/// # Example
///
/// ```rust
/// let line = DumpLineBuilder::new()
///     .username("bob")
///     .last_ip("0x7F000001")
///     .build();
/// ```
pub struct DumpLineBuilder {
    table: String,
    fields: Vec<String>,
}

impl DumpLineBuilder {
    pub fn new() -> Self {
        let mut fields: Vec<String> = (0..65).map(|i| i.to_string()).collect();
        fields[SIGNATURE_INDEX] = quote("cheers, alice, admin");
        fields[10] = "NULL".to_string();
        fields[40] = "NULL".to_string();
        let builder = Self {
            table: "mybb_users".to_string(),
            fields,
        };
        builder
            .username("alice")
            .password_hash("hash123")
            .email("alice@example.com")
            .registered("1700000000")
            .last_ip("0x0A000001")
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn username(self, username: &str) -> Self {
        self.field(USERNAME_INDEX, quote(username))
    }

    pub fn password_hash(self, hash: &str) -> Self {
        self.field(PASSWORD_HASH_INDEX, quote(hash))
    }

    pub fn email(self, email: &str) -> Self {
        self.field(EMAIL_INDEX, quote(email))
    }

    /// Raw SQL literal for the registration column (quote it yourself).
    pub fn registered(self, literal: &str) -> Self {
        self.field(REGISTERED_INDEX, literal)
    }

    /// Raw SQL literal for the last-IP column (quote it yourself).
    pub fn last_ip(self, literal: &str) -> Self {
        self.field(LAST_IP_INDEX, literal)
    }

    /// Overwrite field `index` with a raw SQL literal.
    pub fn field(mut self, index: usize, literal: impl Into<String>) -> Self {
        self.fields[index] = literal.into();
        self
    }

    /// Keep only the first `n` fields.
    pub fn truncate(mut self, n: usize) -> Self {
        self.fields.truncate(n);
        self
    }

    pub fn build(&self) -> String {
        format!(
            "INSERT INTO `{}` VALUES ({});",
            self.table,
            self.fields.join(",")
        )
    }
}

impl Default for DumpLineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap text in single quotes.
pub fn quote(text: &str) -> String {
    format!("'{text}'")
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A complete, valid user line.
pub fn user_line(username: &str, email: &str) -> String {
    DumpLineBuilder::new()
        .username(username)
        .email(email)
        .build()
}

/// `n` valid user lines, `user0` .. `user{n-1}`, newline-joined.
pub fn build_dump(n: usize) -> String {
    (0..n)
        .map(|i| user_line(&format!("user{i}"), &format!("user{i}@example.com")))
        .collect::<Vec<_>>()
        .join("\n")
}
