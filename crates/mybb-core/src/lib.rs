//! mybb-core — tokenizer and normalizer for MyBB user dumps.
//!
//! This crate holds the pure, I/O-free half of mybb-extract: turning one SQL
//! dump line into one [`UserRecord`].
//!
//! # Architecture
//!
//! ```text
//! line ──► tokenizer ──► Vec<&str> ──► normalizer ──► UserRecord
//!              │                           │
//!              └── None (skip)             └── SkipReason (skip)
//! ```
//!
//! Both stages are pure functions of their input; run state belongs to the
//! caller.

pub mod config;
pub mod layout;
pub mod normalizer;
pub mod tokenizer;
pub mod types;

pub use layout::FieldLayout;
pub use normalizer::{normalize, Normalizer, Zone};
pub use tokenizer::tokenize;
pub use types::{FieldError, SkipReason, UserRecord};
