//! Errors raised while loading and validating `MaukaTrieConfig`.
//!
//! Each variant names where the problem sits: the file path, the source that
//! failed to parse, the `[trie]`/`[loader]`/`[log]` section, or the dotted key.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the configuration layer.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The `--config` file does not exist.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// The file extension is not `.toml`, `.json`, `.yaml` or `.yml`.
    #[error("Unsupported configuration format for {0:?} (expected .toml, .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    /// A source could not be parsed, or the merged sources do not fit `MaukaTrieConfig`.
    #[error("Failed to parse configuration from {origin}: {message}")]
    ParseError {
        /// File path, or the layer that failed (`defaults`, `merged sources`)
        origin: String,
        message: String,
    },

    /// A section holds an invalid combination of settings.
    #[error("Invalid [{section}] configuration: {message}")]
    InvalidSection {
        /// `trie`, `loader` or `log`
        section: &'static str,
        message: String,
    },

    /// A numeric setting is outside its accepted range.
    #[error("Configuration value {key} is out of valid range: {message}")]
    ValueOutOfRange {
        /// Dotted key, e.g. `trie.queue_capacity`
        key: &'static str,
        message: &'static str,
    },
}
