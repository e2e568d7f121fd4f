//! Static dump corpora used across harnesses.

use std::path::{Path, PathBuf};

use super::builders::*;

/// Lines that must never tokenize.
pub const CORPUS_NOT_INSERTS: &[&str] = &[
    "-- MySQL dump 10.13  Distrib 5.7.42, for Linux (x86_64)",
    "-- Host: admin@localhost    Database: forum",
    "/*!40101 SET NAMES utf8mb4 */;",
    "DROP TABLE IF EXISTS `mybb_users`;",
    "CREATE TABLE `mybb_users` (`uid` int unsigned NOT NULL, `email` varchar(220));",
    "LOCK TABLES `mybb_users` WRITE;",
    "UNLOCK TABLES;",
    "INSERT INTO `mybb_users` VALUES (1,'unterminated@example.com'",
];

/// A small but realistic dump. Expected results (UTC):
///
/// | user  | date        | time       | last IP              |
/// |-------|-------------|------------|----------------------|
/// | alice | 2023-11-14  | 22:13:20   | 10.0.0.1             |
/// | bob   | (invalid)   | (invalid)  | 127.0.0.1            |
/// | carol | 2009-02-13  | 23:31:30   | (bad hex: 0xZZ)      |
/// | dave  | 1970-01-01  | 00:00:00   | 192.168.1.20         |
///
/// Plus one too-short tuple and several lines that are filtered or do not
/// tokenize.
pub fn sample_dump() -> String {
    let mut lines: Vec<String> = CORPUS_NOT_INSERTS[..6].iter().map(|s| s.to_string()).collect();
    lines.push(String::new());
    lines.push(DumpLineBuilder::new().build());
    lines.push(
        DumpLineBuilder::new()
            .username("bob")
            .email("bob@example.org")
            .password_hash("$2y$10$abc,def")
            .registered("'garbage'")
            .last_ip("0x7F000001")
            .build(),
    );
    lines.push(
        DumpLineBuilder::new()
            .username("carol")
            .email("carol@example.net")
            .password_hash("c0ffee")
            .registered("1234567890.75")
            .last_ip("'0xZZ'")
            .build(),
    );
    lines.push(
        DumpLineBuilder::new()
            .username("dave")
            .email("dave@example.com")
            .password_hash("d4v3")
            .registered("0")
            .last_ip("'192.168.1.20'")
            .build(),
    );
    lines.push("INSERT INTO `mybb_users` VALUES (99,'short','x',0,0,'short@example.com');".into());
    lines.push("INSERT INTO `mybb_posts` VALUES (1,2,'hello world');".into());
    lines.push(CORPUS_NOT_INSERTS[6].to_string());
    lines.join("\n") + "\n"
}

/// Write `contents` to `dir/name` and return the path.
pub fn write_dump(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write dump fixture");
    path
}
