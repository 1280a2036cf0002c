//! Configuration types for sift.
//!
//! [`Config::load`] reads `~/.config/sift/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[engine]
max_input_bytes = 1048576
max_depth       = 32
raw_field       = "_raw"

[view]
stream_tail          = 12
event_preview_chars  = 130
sentence_split_chars = 240
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/sift/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

/// `[engine]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Flattened text beyond this many bytes is cut before extraction.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
    /// Container levels the flattener descends before emitting JSON text.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Payload key whose value is shown verbatim when no structure is found.
    #[serde(default = "default_raw_field")]
    pub raw_field: String,
}

fn default_max_input_bytes() -> usize { 1024 * 1024 }
fn default_max_depth() -> usize { crate::flatten::DEFAULT_MAX_DEPTH }
fn default_raw_field() -> String { "_raw".to_string() }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
            max_depth: default_max_depth(),
            raw_field: default_raw_field(),
        }
    }
}

/// `[view]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ViewConfig {
    /// How many of the most recent events the progress view shows.
    #[serde(default = "default_stream_tail")]
    pub stream_tail: usize,
    /// Event content is cut to this many chars in the progress view.
    #[serde(default = "default_event_preview_chars")]
    pub event_preview_chars: usize,
    /// Overall summaries longer than this are split into sentences.
    #[serde(default = "default_sentence_split_chars")]
    pub sentence_split_chars: usize,
}

fn default_stream_tail() -> usize { 12 }
fn default_event_preview_chars() -> usize { 130 }
fn default_sentence_split_chars() -> usize { 240 }

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            stream_tail: default_stream_tail(),
            event_preview_chars: default_event_preview_chars(),
            sentence_split_chars: default_sentence_split_chars(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/sift/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::layered(&path, false)
    }

    /// Load an explicit config file on top of the built-in defaults. The file
    /// must exist.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        Self::layered(path, true)
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

    fn layered(path: &Path, required: bool) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
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
        .join("sift")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
