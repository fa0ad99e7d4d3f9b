//! Prefix tree over arbitrary symbol sequences.
//!
//! [`NiihauSequenceTrie`] runs the same engine as the string facades with a
//! caller-chosen symbol type, e.g. bytes, path segments or tokens. Patterns use
//! `None` as the wildcard.

use std::fmt::Debug;
use std::iter::FusedIterator;

use tracing::trace;

use super::engine::{Insertion, OnExisting, TrieCore};
use super::traversal::{Terminals, WalkMode};
use super::{KeyComparer, NiihauTrieConfig, NiihauTrieError, NiihauTrieResult, Ordinal};

/// Prefix tree keyed by sequences of `K`, with a `V` per stored sequence.
///
/// # Examples
///
/// ```
/// use mauka_trie_lib::data_structures::niihau_trie::NiihauSequenceTrie;
///
/// let mut routes = NiihauSequenceTrie::new();
/// routes.add(&["api", "v1", "users"], 1).unwrap();
/// routes.add(&["api", "v1"], 2).unwrap();
///
/// let found = routes
///     .longest_prefix_match(&["api", "v1", "users", "42"])
///     .unwrap();
/// assert_eq!(found, Some((&["api", "v1", "users"][..], &1)));
///
/// let any_version = routes.matches(&[Some("api"), None]).unwrap();
/// assert_eq!(any_version.count(), 1);
/// ```
#[derive(Debug)]
pub struct NiihauSequenceTrie<K, V = (), C = Ordinal> {
    core: TrieCore<K, Vec<K>, V, C>,
}

impl<K: PartialEq + Clone, V> NiihauSequenceTrie<K, V> {
    pub fn new() -> Self {
        Self::with_comparer(Ordinal)
    }
}

impl<K: Clone, V, C: KeyComparer<K>> NiihauSequenceTrie<K, V, C> {
    pub fn with_comparer(comparer: C) -> Self {
        Self::with_comparer_and_config(comparer, &NiihauTrieConfig::default())
    }

    /// Only the buffer settings of `config` apply; symbol equality comes from `comparer`.
    pub fn with_comparer_and_config(comparer: C, config: &NiihauTrieConfig) -> Self {
        Self {
            core: TrieCore::new(comparer, config),
        }
    }

    /// Adds `sequence` with `value`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the sequence was added.
    /// * `Err(NiihauTrieError::AlreadyExists)` - If the sequence is already stored.
    /// * `Err(NiihauTrieError::InvalidArgument)` - If the sequence is empty.
    pub fn add(&mut self, sequence: &[K], value: V) -> NiihauTrieResult<()>
    where
        K: Debug,
    {
        if self.try_add(sequence, value)? {
            Ok(())
        } else {
            Err(NiihauTrieError::AlreadyExists(format!("{:?}", sequence)))
        }
    }

    /// Adds `sequence` unless it is already stored; returns whether it was new.
    pub fn try_add(&mut self, sequence: &[K], value: V) -> NiihauTrieResult<bool> {
        let outcome = self
            .core
            .insert(sequence, || sequence.to_vec(), value, OnExisting::Keep)?;
        trace!(len = sequence.len(), added = matches!(outcome, Insertion::Added), "sequence insert");
        Ok(matches!(outcome, Insertion::Added))
    }

    /// Stores `value` under `sequence`, returning the replaced value if any.
    pub fn set(&mut self, sequence: &[K], value: V) -> NiihauTrieResult<Option<V>> {
        match self
            .core
            .insert(sequence, || sequence.to_vec(), value, OnExisting::Overwrite)?
        {
            Insertion::Replaced(previous) => Ok(Some(previous)),
            Insertion::Added | Insertion::Exists(_) => Ok(None),
        }
    }

    pub fn get(&self, sequence: &[K]) -> NiihauTrieResult<Option<&V>> {
        Ok(self
            .core
            .entry(sequence.iter().cloned())?
            .map(|(_, value)| value))
    }

    pub fn get_mut(&mut self, sequence: &[K]) -> NiihauTrieResult<Option<&mut V>> {
        self.core.value_mut(sequence.iter().cloned())
    }

    pub fn contains(&self, sequence: &[K]) -> NiihauTrieResult<bool> {
        Ok(self.core.find_terminal(sequence.iter().cloned())?.is_some())
    }

    /// Removes `sequence`, returning its value.
    pub fn remove(&mut self, sequence: &[K]) -> NiihauTrieResult<Option<V>> {
        let removed = self
            .core
            .remove(sequence.iter().cloned())?
            .map(|(_, value)| value);
        trace!(len = sequence.len(), removed = removed.is_some(), "sequence remove");
        Ok(removed)
    }

    /// Stored sequences starting with `prefix`, the prefix itself included.
    pub fn starts_with(&self, prefix: &[K]) -> NiihauTrieResult<Sequences<'_, K, V, C>> {
        Ok(Sequences(self.core.walk_prefix(prefix.iter().cloned())?))
    }

    /// Stored sequences whose first `pattern.len()` symbols match `pattern`.
    pub fn starts_with_pattern(&self, pattern: &[Option<K>]) -> NiihauTrieResult<Sequences<'_, K, V, C>> {
        Ok(Sequences(self.core.walk_pattern(pattern.to_vec(), WalkMode::Prefix)?))
    }

    /// Stored sequences of exactly `pattern.len()` symbols matching `pattern`.
    pub fn matches(&self, pattern: &[Option<K>]) -> NiihauTrieResult<Sequences<'_, K, V, C>> {
        Ok(Sequences(self.core.walk_pattern(pattern.to_vec(), WalkMode::Exact)?))
    }

    /// Longest stored sequence that is a prefix of `input`.
    pub fn longest_prefix_match(&self, input: &[K]) -> NiihauTrieResult<Option<(&[K], &V)>> {
        Ok(self
            .core
            .longest_prefix(input.iter().cloned())?
            .and_then(|id| self.core.arena.get(id).entry())
            .map(|(sequence, value)| (sequence.as_slice(), value)))
    }

    pub fn iter(&self) -> Sequences<'_, K, V, C> {
        Sequences(self.core.walk_all())
    }

    pub fn len(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.len() == 0
    }

    /// Number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.core.node_count()
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }
}

impl<K: PartialEq + Clone, V> Default for NiihauSequenceTrie<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for NiihauSequenceTrie<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
        }
    }
}

impl<'a, K: Clone, V, C: KeyComparer<K>> IntoIterator for &'a NiihauSequenceTrie<K, V, C> {
    type Item = (&'a [K], &'a V);
    type IntoIter = Sequences<'a, K, V, C>;

    fn into_iter(self) -> Sequences<'a, K, V, C> {
        self.iter()
    }
}

/// Lazy iterator over `(sequence, value)` pairs of a [`NiihauSequenceTrie`].
#[derive(Debug)]
pub struct Sequences<'a, K, V, C>(Terminals<'a, K, Vec<K>, V, C>);

impl<'a, K, V, C: KeyComparer<K>> Iterator for Sequences<'a, K, V, C> {
    type Item = (&'a [K], &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0
            .next()
            .map(|(sequence, value)| (sequence.as_slice(), value))
    }
}

impl<K, V, C: KeyComparer<K>> FusedIterator for Sequences<'_, K, V, C> {}
