//! Configuration types for mybb-extract.
//!
//! [`Config::load`] layers an optional user file on top of the embedded
//! defaults: either an explicit `--config` path (which must exist) or
//! `~/.config/mybb-extract/config.toml` (used only when present).
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::layout::FieldLayout;
use crate::normalizer::{InvalidZone, Normalizer, Zone};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[schema]
username      = 1
password_hash = 2
email         = 5
registered    = 15
last_ip       = 64

[pipeline]
require_at_sign   = true
progress_interval = 500

[output]
timezone = "local"
"#;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error(transparent)]
    InvalidZone(#[from] InvalidZone),
}

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub schema: FieldLayout,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[pipeline]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Skip lines without an `@` before tokenizing them.
    #[serde(default = "default_require_at_sign")]
    pub require_at_sign: bool,
    /// Console progress every N processed lines; 0 turns it off.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
}

fn default_require_at_sign() -> bool { true }
fn default_progress_interval() -> u64 { 500 }

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            require_at_sign: default_require_at_sign(),
            progress_interval: default_progress_interval(),
        }
    }
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String { "local".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the built-in defaults, then `explicit` if given, otherwise the
    /// per-user config file if it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let user_file = match explicit {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(user_file)
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Parsed `[output] timezone`.
    pub fn zone(&self) -> Result<Zone, ConfigError> {
        Ok(self.output.timezone.parse()?)
    }

    /// Normalizer for the configured schema and timezone.
    pub fn normalizer(&self) -> Result<Normalizer, ConfigError> {
        Ok(Normalizer::new(self.schema, self.zone()?))
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("mybb-extract")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
