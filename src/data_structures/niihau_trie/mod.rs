//! Niihau Trie Implementation
//!
//! This module provides a character-indexed prefix tree for bulk string
//! dictionaries (vocabularies, autocomplete corpora) with exact membership,
//! prefix enumeration, wildcard pattern matching and longest-prefix lookup.
//!
//! Three facades share one engine:
//! * [`NiihauTrie`] - a set of strings
//! * [`NiihauTrieDictionary`] - strings mapped to values
//! * [`NiihauSequenceTrie`] - the same over any symbol type, not only `char`
//!
//! # Example
//!
//! ```
//! use mauka_trie_lib::data_structures::niihau_trie::{Character, NiihauTrie};
//!
//! let mut trie = NiihauTrie::new();
//! trie.add_range(["ABC", "AB", "ADE", "ABCDE"]).unwrap();
//!
//! let mut words: Vec<&str> = trie.starts_with("ABC").unwrap().collect();
//! words.sort_unstable();
//! assert_eq!(words, vec!["ABC", "ABCDE"]);
//!
//! let pattern = [Character::ANY, Character::from('B')];
//! assert_eq!(trie.matches(&pattern).unwrap().collect::<Vec<_>>(), vec!["AB"]);
//!
//! assert_eq!(trie.longest_prefix_match("ABCD").unwrap(), Some("ABC"));
//! ```
//!
//! # Concurrency
//!
//! Mutation takes `&mut self` and queries take `&self`, so any number of
//! threads may query a shared trie while no one writes. There is no internal
//! locking of the tree; wrap it in a reader-writer lock to mix the two.

mod character;
mod comparer;
mod dictionary;
mod engine;
mod error;
mod node;
mod pool;
mod sequence;
mod traversal;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub use character::{parse_pattern, Character};
pub use comparer::{CaseRule, IgnoreAsciiCase, IgnoreCase, KeyComparer, Ordinal};
pub use dictionary::{Entries, NiihauTrieDictionary, TrieEntry};
pub use error::NiihauTrieError;
pub use sequence::{NiihauSequenceTrie, Sequences};

use engine::{Insertion, OnExisting, TrieCore};
use traversal::{Terminals, WalkMode};

/// Result type for Niihau Trie operations
pub type NiihauTrieResult<T> = Result<T, NiihauTrieError>;

/// Configuration options for the Niihau Trie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NiihauTrieConfig {
    /// Whether characters are compared exactly (`true`) or ignoring case
    pub case_sensitive: bool,

    /// Maximum number of idle query buffers kept for reuse
    pub pool_capacity: usize,

    /// Initial capacity of a freshly allocated query buffer
    pub queue_capacity: usize,
}

impl Default for NiihauTrieConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            pool_capacity: 16,
            queue_capacity: 64,
        }
    }
}

impl NiihauTrieConfig {
    /// Comparison rule selected by `case_sensitive`.
    pub fn case_rule(&self) -> CaseRule {
        CaseRule::from_case_sensitive(self.case_sensitive)
    }
}

/// Niihau Trie is a set of strings stored as a character-indexed prefix tree.
///
/// Key features:
/// * Exact membership in O(word length)
/// * Prefix and wildcard pattern enumeration as lazy iterators
/// * Longest stored prefix of an input in one linear pass
/// * Pluggable character equality (see [`KeyComparer`])
#[derive(Debug)]
pub struct NiihauTrie<C = Ordinal> {
    core: TrieCore<char, String, (), C>,
}

impl NiihauTrie {
    /// Creates a new empty `NiihauTrie` with ordinal character comparison.
    ///
    /// # Returns
    ///
    /// A new `NiihauTrie` instance.
    pub fn new() -> Self {
        Self::with_comparer(Ordinal)
    }
}

impl NiihauTrie<CaseRule> {
    /// Creates a new empty `NiihauTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    ///
    /// # Returns
    ///
    /// A new `NiihauTrie` comparing characters per `config.case_sensitive`.
    pub fn with_config(config: NiihauTrieConfig) -> Self {
        Self::with_comparer_and_config(config.case_rule(), &config)
    }
}

impl<C: KeyComparer<char>> NiihauTrie<C> {
    /// Creates a new empty `NiihauTrie` using `comparer` for character equality.
    pub fn with_comparer(comparer: C) -> Self {
        Self::with_comparer_and_config(comparer, &NiihauTrieConfig::default())
    }

    /// Creates a new empty `NiihauTrie` with an explicit comparer; only the
    /// buffer settings of `config` are used.
    pub fn with_comparer_and_config(comparer: C, config: &NiihauTrieConfig) -> Self {
        Self {
            core: TrieCore::new(comparer, config),
        }
    }

    /// Adds a word to the trie.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to add.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the word was added.
    /// * `Err(NiihauTrieError::AlreadyExists)` - If the word is already stored.
    /// * `Err(NiihauTrieError::InvalidArgument)` - If the word is empty.
    pub fn add(&mut self, word: &str) -> NiihauTrieResult<()> {
        if self.try_add(word)? {
            Ok(())
        } else {
            Err(NiihauTrieError::AlreadyExists(word.to_string()))
        }
    }

    /// Adds a word to the trie unless it is already stored.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was added, `false` if it was already present.
    /// * `Err(NiihauTrieError)` - If the word is empty.
    pub fn try_add(&mut self, word: &str) -> NiihauTrieResult<bool> {
        let symbols: Vec<char> = word.chars().collect();
        let outcome = self
            .core
            .insert(&symbols, || word.to_string(), (), OnExisting::Keep)?;
        trace!(word, added = matches!(outcome, Insertion::Added), "trie add");
        Ok(matches!(outcome, Insertion::Added))
    }

    /// Adds every word of `words`, skipping the ones already stored.
    ///
    /// Stops at the first empty word; words before it stay added.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of words that were new.
    /// * `Err(NiihauTrieError)` - If a word is empty.
    pub fn add_range<I, S>(&mut self, words: I) -> NiihauTrieResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for word in words {
            if self.try_add(word.as_ref())? {
                added += 1;
            }
        }
        debug!(added, total = self.len(), "bulk load into trie");
        Ok(added)
    }

    /// Removes a word from the trie.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was removed, `false` if it wasn't found.
    /// * `Err(NiihauTrieError)` - If the word is empty.
    pub fn remove(&mut self, word: &str) -> NiihauTrieResult<bool> {
        let removed = self.core.remove(word.chars())?.is_some();
        trace!(word, removed, "trie remove");
        Ok(removed)
    }

    /// Checks if a word is stored in the trie.
    pub fn contains(&self, word: &str) -> NiihauTrieResult<bool> {
        Ok(self.core.find_terminal(word.chars())?.is_some())
    }

    /// Stored spelling of `word`.
    ///
    /// Differs from `word` only with a case-insensitive comparer.
    pub fn get(&self, word: &str) -> NiihauTrieResult<Option<&str>> {
        Ok(self.core.entry(word.chars())?.map(|(w, _)| w.as_str()))
    }

    /// Finds all words starting with `prefix`, the prefix itself included.
    ///
    /// # Returns
    ///
    /// * `Ok(Words)` - A lazy iterator; empty if no word has this prefix.
    /// * `Err(NiihauTrieError)` - If the prefix is empty.
    pub fn starts_with(&self, prefix: &str) -> NiihauTrieResult<Words<'_, C>> {
        Ok(Words(self.core.walk_prefix(prefix.chars())?))
    }

    /// Finds all words whose first `pattern.len()` characters match `pattern`.
    pub fn starts_with_pattern(&self, pattern: &[Character]) -> NiihauTrieResult<Words<'_, C>> {
        Ok(Words(self.core.walk_pattern(symbols(pattern), WalkMode::Prefix)?))
    }

    /// Finds all words of exactly `pattern.len()` characters matching `pattern`.
    pub fn matches(&self, pattern: &[Character]) -> NiihauTrieResult<Words<'_, C>> {
        Ok(Words(self.core.walk_pattern(symbols(pattern), WalkMode::Exact)?))
    }

    /// Finds the longest stored word that is a prefix of `input`.
    pub fn longest_prefix_match(&self, input: &str) -> NiihauTrieResult<Option<&str>> {
        Ok(self
            .core
            .longest_prefix(input.chars())?
            .and_then(|id| self.core.arena.get(id).entry())
            .map(|(w, _)| w.as_str()))
    }

    /// Iterates over all stored words.
    pub fn iter(&self) -> Words<'_, C> {
        Words(self.core.walk_all())
    }

    /// Returns the number of words in the trie.
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Checks if the trie is empty.
    pub fn is_empty(&self) -> bool {
        self.core.len() == 0
    }

    /// Number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.core.node_count()
    }

    /// Removes every word.
    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn comparer(&self) -> &C {
        self.core.comparer()
    }
}

impl Default for NiihauTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clone> Clone for NiihauTrie<C> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
        }
    }
}

impl<'a, C: KeyComparer<char>> IntoIterator for &'a NiihauTrie<C> {
    type Item = &'a str;
    type IntoIter = Words<'a, C>;

    fn into_iter(self) -> Words<'a, C> {
        self.iter()
    }
}

/// Lazy iterator over words of a [`NiihauTrie`].
#[derive(Debug)]
pub struct Words<'a, C>(Terminals<'a, char, String, (), C>);

impl<'a, C: KeyComparer<char>> Iterator for Words<'a, C> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.0.next().map(|(word, _)| word.as_str())
    }
}

impl<C: KeyComparer<char>> std::iter::FusedIterator for Words<'_, C> {}

/// Converts a character pattern into the engine's `Option<char>` form.
pub(crate) fn symbols(pattern: &[Character]) -> Vec<Option<char>> {
    pattern.iter().map(|c| c.char()).collect()
}
