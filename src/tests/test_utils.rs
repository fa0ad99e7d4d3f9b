//! Test utilities and fixtures for Mauka Trie.
//!
//! Word generators for property-based tests and a temporary-directory fixture
//! for configuration and vocabulary files.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use std::path::PathBuf;
use tempfile::TempDir;

/// Maximum word length for generated test data.
const MAX_WORD_LENGTH: usize = 8;

/// Create a temporary directory for test files.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Strategy for non-empty words over a small alphabet.
///
/// The alphabet is kept small so that generated words share prefixes and
/// exercise node promotion, demotion and pruning.
pub fn word_strategy() -> BoxedStrategy<String> {
    proptest::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'd']), 1..=MAX_WORD_LENGTH)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Strategy for word lists of up to `max_words` entries, duplicates allowed.
pub fn words_strategy(max_words: usize) -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(word_strategy(), 0..max_words).boxed()
}

/// Test fixture owning a temporary directory and the environment variables
/// set for one test.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: create_test_dir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable that is removed when the fixture drops.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        std::env::set_var(&key, value.into());
        self.env_vars.push(key);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
