//! Mauka Trie Library
//!
//! A character-indexed prefix tree with exact, prefix, wildcard-pattern and
//! longest-prefix queries, plus the configuration, error and vocabulary
//! loading layers used by the `mauka_trie` binary.
//!
//! # Architecture
//!
//! - [`data_structures::niihau_trie`]: the trie engine and its facades
//!   (string set, string dictionary, generic symbol sequences)
//! - [`config`]: layered configuration (defaults, file, environment)
//! - [`error`]: crate-level error type and error reporting
//! - [`loader`]: word-per-line vocabulary files

pub mod config;
pub mod data_structures;
pub mod error;
pub mod loader;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Mauka Trie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing error reporter and the global configuration.
pub fn init(config: crate::config::MaukaTrieConfig) -> error::MaukaResult<()> {
    use crate::config::Validate;

    config.validate()?;
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
    crate::config::init_global_config(config);
    Ok(())
}
