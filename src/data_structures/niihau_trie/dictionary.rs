//! String-keyed dictionary facade.
//!
//! [`NiihauTrieDictionary`] stores a value on every terminal node and offers
//! the usual map operations next to the prefix, pattern and longest-prefix
//! queries of [`NiihauTrie`](super::NiihauTrie).

use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::engine::{Insertion, OnExisting, TrieCore};
use super::traversal::{Terminals, WalkMode};
use super::{
    symbols, CaseRule, Character, KeyComparer, NiihauTrieConfig, NiihauTrieError,
    NiihauTrieResult, Ordinal,
};

/// A word and the value to store with it, for bulk loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieEntry<V> {
    /// The word
    pub word: String,
    /// Its value
    pub value: V,
}

impl<V> TrieEntry<V> {
    pub fn new<S: Into<String>>(word: S, value: V) -> Self {
        Self {
            word: word.into(),
            value,
        }
    }
}

impl<S: Into<String>, V> From<(S, V)> for TrieEntry<V> {
    fn from((word, value): (S, V)) -> Self {
        Self::new(word, value)
    }
}

/// Dictionary from strings to `V` backed by a prefix tree.
///
/// # Examples
///
/// ```
/// use mauka_trie_lib::data_structures::niihau_trie::{NiihauTrieDictionary, NiihauTrieError};
///
/// let mut dict = NiihauTrieDictionary::new();
/// dict.add("apple", 1).unwrap();
/// dict.set("apply", 2).unwrap();
///
/// assert_eq!(dict.get("apple").unwrap(), Some(&1));
/// assert_eq!(
///     dict.value("pear"),
///     Err(NiihauTrieError::KeyNotFound("pear".to_string()))
/// );
/// assert_eq!(dict.starts_with("app").unwrap().count(), 2);
/// ```
#[derive(Debug)]
pub struct NiihauTrieDictionary<V, C = Ordinal> {
    core: TrieCore<char, String, V, C>,
}

impl<V> NiihauTrieDictionary<V> {
    /// Creates an empty dictionary with ordinal character comparison.
    pub fn new() -> Self {
        Self::with_comparer(Ordinal)
    }
}

impl<V> NiihauTrieDictionary<V, CaseRule> {
    /// Creates an empty dictionary comparing characters per `config.case_sensitive`.
    pub fn with_config(config: NiihauTrieConfig) -> Self {
        Self::with_comparer_and_config(config.case_rule(), &config)
    }
}

impl<V, C: KeyComparer<char>> NiihauTrieDictionary<V, C> {
    pub fn with_comparer(comparer: C) -> Self {
        Self::with_comparer_and_config(comparer, &NiihauTrieConfig::default())
    }

    pub fn with_comparer_and_config(comparer: C, config: &NiihauTrieConfig) -> Self {
        Self {
            core: TrieCore::new(comparer, config),
        }
    }

    /// Adds `word` with `value`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the word was added.
    /// * `Err(NiihauTrieError::AlreadyExists)` - If the word is already stored; its value is untouched.
    /// * `Err(NiihauTrieError::InvalidArgument)` - If the word is empty.
    pub fn add(&mut self, word: &str, value: V) -> NiihauTrieResult<()> {
        if self.try_add(word, value)? {
            Ok(())
        } else {
            Err(NiihauTrieError::AlreadyExists(word.to_string()))
        }
    }

    /// Adds `word` with `value` unless the word is already stored.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if added, `false` if the word was present (its value is untouched).
    /// * `Err(NiihauTrieError)` - If the word is empty.
    pub fn try_add(&mut self, word: &str, value: V) -> NiihauTrieResult<bool> {
        let outcome = self.insert(word, value, OnExisting::Keep)?;
        Ok(matches!(outcome, Insertion::Added))
    }

    /// Stores `value` under `word`, replacing any previous value.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(previous))` - If the word was already stored.
    /// * `Ok(None)` - If the word is new.
    /// * `Err(NiihauTrieError)` - If the word is empty.
    pub fn set(&mut self, word: &str, value: V) -> NiihauTrieResult<Option<V>> {
        match self.insert(word, value, OnExisting::Overwrite)? {
            Insertion::Replaced(previous) => Ok(Some(previous)),
            Insertion::Added | Insertion::Exists(_) => Ok(None),
        }
    }

    fn insert(&mut self, word: &str, value: V, on_existing: OnExisting) -> NiihauTrieResult<Insertion<V>> {
        let symbols: Vec<char> = word.chars().collect();
        let outcome = self
            .core
            .insert(&symbols, || word.to_string(), value, on_existing)?;
        trace!(word, added = matches!(outcome, Insertion::Added), "dictionary insert");
        Ok(outcome)
    }

    /// Adds every entry with [`add`](Self::add) semantics.
    ///
    /// Stops at the first empty or already stored word; entries before it
    /// stay added and the stored value of the duplicate is untouched.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of entries added.
    /// * `Err(NiihauTrieError::AlreadyExists)` - If a word is already stored or repeats within `entries`.
    /// * `Err(NiihauTrieError::InvalidArgument)` - If a word is empty.
    pub fn add_range<I, E>(&mut self, entries: I) -> NiihauTrieResult<usize>
    where
        I: IntoIterator<Item = E>,
        E: Into<TrieEntry<V>>,
    {
        let mut added = 0;
        for entry in entries {
            let TrieEntry { word, value } = entry.into();
            self.add(&word, value)?;
            added += 1;
        }
        debug!(added, total = self.len(), "bulk load into dictionary");
        Ok(added)
    }

    /// Value stored under `word`, `None` if absent.
    pub fn get(&self, word: &str) -> NiihauTrieResult<Option<&V>> {
        Ok(self.core.entry(word.chars())?.map(|(_, value)| value))
    }

    pub fn get_mut(&mut self, word: &str) -> NiihauTrieResult<Option<&mut V>> {
        self.core.value_mut(word.chars())
    }

    /// Value stored under `word`.
    ///
    /// # Returns
    ///
    /// * `Ok(&V)` - The stored value.
    /// * `Err(NiihauTrieError::KeyNotFound)` - If the word is not stored.
    pub fn value(&self, word: &str) -> NiihauTrieResult<&V> {
        self.get(word)?
            .ok_or_else(|| NiihauTrieError::KeyNotFound(word.to_string()))
    }

    pub fn contains_key(&self, word: &str) -> NiihauTrieResult<bool> {
        Ok(self.core.find_terminal(word.chars())?.is_some())
    }

    /// Removes `word`, returning its value.
    pub fn remove(&mut self, word: &str) -> NiihauTrieResult<Option<V>> {
        let removed = self.core.remove(word.chars())?.map(|(_, value)| value);
        trace!(word, removed = removed.is_some(), "dictionary remove");
        Ok(removed)
    }

    /// Words starting with `prefix` (the prefix itself included) with their values.
    pub fn starts_with(&self, prefix: &str) -> NiihauTrieResult<Entries<'_, V, C>> {
        Ok(Entries(self.core.walk_prefix(prefix.chars())?))
    }

    /// Entries whose first `pattern.len()` characters match `pattern`.
    pub fn starts_with_pattern(&self, pattern: &[Character]) -> NiihauTrieResult<Entries<'_, V, C>> {
        Ok(Entries(self.core.walk_pattern(symbols(pattern), WalkMode::Prefix)?))
    }

    /// Entries of exactly `pattern.len()` characters matching `pattern`.
    pub fn matches(&self, pattern: &[Character]) -> NiihauTrieResult<Entries<'_, V, C>> {
        Ok(Entries(self.core.walk_pattern(symbols(pattern), WalkMode::Exact)?))
    }

    /// Longest stored word that is a prefix of `input`, with its value.
    pub fn longest_prefix_match(&self, input: &str) -> NiihauTrieResult<Option<(&str, &V)>> {
        Ok(self
            .core
            .longest_prefix(input.chars())?
            .and_then(|id| self.core.arena.get(id).entry())
            .map(|(word, value)| (word.as_str(), value)))
    }

    /// Iterates over all `(word, value)` pairs.
    pub fn iter(&self) -> Entries<'_, V, C> {
        Entries(self.core.walk_all())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(word, _)| word)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.len() == 0
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn comparer(&self) -> &C {
        self.core.comparer()
    }
}

impl<V: PartialEq, C: KeyComparer<char>> NiihauTrieDictionary<V, C> {
    /// Checks that `word` is stored with exactly `value`.
    pub fn contains_entry(&self, word: &str, value: &V) -> NiihauTrieResult<bool> {
        Ok(self.get(word)?.is_some_and(|stored| stored == value))
    }

    /// Removes `word` only if it is stored with exactly `value`.
    pub fn remove_entry(&mut self, word: &str, value: &V) -> NiihauTrieResult<bool> {
        if self.contains_entry(word, value)? {
            Ok(self.remove(word)?.is_some())
        } else {
            Ok(false)
        }
    }
}

impl<V> Default for NiihauTrieDictionary<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, C: Clone> Clone for NiihauTrieDictionary<V, C> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
        }
    }
}

impl<'a, V, C: KeyComparer<char>> IntoIterator for &'a NiihauTrieDictionary<V, C> {
    type Item = (&'a str, &'a V);
    type IntoIter = Entries<'a, V, C>;

    fn into_iter(self) -> Entries<'a, V, C> {
        self.iter()
    }
}

/// Lazy iterator over `(word, value)` pairs of a [`NiihauTrieDictionary`].
#[derive(Debug)]
pub struct Entries<'a, V, C>(Terminals<'a, char, String, V, C>);

impl<'a, V, C: KeyComparer<char>> Iterator for Entries<'a, V, C> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(word, value)| (word.as_str(), value))
    }
}

impl<V, C: KeyComparer<char>> FusedIterator for Entries<'_, V, C> {}
