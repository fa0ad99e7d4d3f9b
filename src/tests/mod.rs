//! Test modules for Mauka Trie.
//!
//! This module contains the crate-level tests, including:
//! - Configuration loading and validation
//! - Error composition and reporting
//! - Property-based tests of the trie facades using proptest
//! - Test fixtures and utilities

pub mod config_tests;
pub mod niihau_trie_property_tests;
pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_strategy, words_strategy, TestFixture};
