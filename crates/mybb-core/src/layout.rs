//! Positional field layout of the exported users table.
//!
//! A `mybb_users` dump row carries no column names, so every value is found by
//! its position in the tuple. [`FieldLayout::MYBB`] holds the positions used
//! by MyBB 1.8 exports; other schema versions can override them from config.

use serde::Deserialize;

/// Tuple position of `username`.
pub const USERNAME_INDEX: usize = 1;
/// Tuple position of the password hash.
pub const PASSWORD_HASH_INDEX: usize = 2;
/// Tuple position of `email`.
pub const EMAIL_INDEX: usize = 5;
/// Tuple position of `regdate` (Unix seconds).
pub const REGISTERED_INDEX: usize = 15;
/// Tuple position of `lastip` (hex or text).
pub const LAST_IP_INDEX: usize = 64;

/// Where each extracted column lives in a tokenized tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FieldLayout {
    pub username: usize,
    pub password_hash: usize,
    pub email: usize,
    pub registered: usize,
    pub last_ip: usize,
}

impl FieldLayout {
    /// Layout of the stock `mybb_users` table.
    pub const MYBB: FieldLayout = FieldLayout {
        username: USERNAME_INDEX,
        password_hash: PASSWORD_HASH_INDEX,
        email: EMAIL_INDEX,
        registered: REGISTERED_INDEX,
        last_ip: LAST_IP_INDEX,
    };

    /// Smallest tuple that contains every column of this layout.
    pub fn min_fields(&self) -> usize {
        [
            self.username,
            self.password_hash,
            self.email,
            self.registered,
            self.last_ip,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
            + 1
    }
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self::MYBB
    }
}
