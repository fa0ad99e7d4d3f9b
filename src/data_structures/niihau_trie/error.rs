//! Error types for Niihau Trie.
//!
//! This module defines the error types that can occur during Niihau Trie operations.
//! "Not found" is an expected outcome for lookups, removals and searches and is
//! reported through `bool`/`Option`/empty iterators instead.

/// Errors that can occur in Niihau Trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NiihauTrieError {
    /// An argument failed validation. Raised before any mutation happens.
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// The word is already stored (only from the `add` entry points).
    #[error("An entry with the same word already exists: '{0}'")]
    AlreadyExists(String),

    /// The word is not stored (only from value lookups that must succeed).
    #[error("Word not found: '{0}'")]
    KeyNotFound(String),
}

impl NiihauTrieError {
    /// Error for an empty word, prefix, pattern or input.
    pub fn empty(argument: &'static str) -> Self {
        Self::InvalidArgument {
            argument,
            reason: "must not be empty",
        }
    }
}
