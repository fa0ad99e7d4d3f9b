//! Shared trie engine behind every facade.
//!
//! [`TrieCore`] owns the node arena, the symbol comparer, the word count and
//! the query buffer pool. It implements insertion and removal (including the
//! node-kind transitions) plus the descent primitives; the lazy enumerations
//! live in the `traversal` module.
//!
//! Everything is generic over the edge symbol `K`, the stored word `W` and the
//! payload `V`, so the string set, the string dictionary and the generic
//! sequence trie all run the exact same algorithms.

use std::iter::Peekable;

use tracing::trace;

use super::comparer::KeyComparer;
use super::node::{NodeArena, NodeId, TrieNode, ROOT};
use super::pool::QueuePool;
use super::{NiihauTrieConfig, NiihauTrieError, NiihauTrieResult};

/// What to do when the inserted word is already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OnExisting {
    /// Leave the stored entry untouched
    Keep,
    /// Replace the stored value
    Overwrite,
}

/// Outcome of [`TrieCore::insert`].
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Insertion<V> {
    /// A new word was stored
    Added,
    /// The word was already stored; the rejected value is handed back
    Exists(V),
    /// The word was already stored and its value was replaced; holds the old value
    Replaced(V),
}

#[derive(Debug)]
pub(crate) struct TrieCore<K, W, V, C> {
    pub(super) arena: NodeArena<K, W, V>,
    comparer: C,
    count: usize,
    pub(super) pool: QueuePool,
}

impl<K, W, V, C> TrieCore<K, W, V, C>
where
    C: KeyComparer<K>,
{
    pub fn new(comparer: C, config: &NiihauTrieConfig) -> Self {
        Self {
            arena: NodeArena::new(),
            comparer,
            count: 0,
            pool: QueuePool::new(config.pool_capacity, config.queue_capacity),
        }
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.live_nodes()
    }

    pub fn clear(&mut self) {
        self.arena.reset();
        self.count = 0;
    }

    /// Child of `parent` whose key equals `key` under the comparer.
    #[inline]
    pub fn child(&self, parent: NodeId, key: &K) -> Option<NodeId> {
        self.arena
            .get(parent)
            .children()
            .iter()
            .copied()
            .find(|&id| {
                self.arena
                    .get(id)
                    .key()
                    .is_some_and(|k| self.comparer.equals(k, key))
            })
    }

    /// Node reached by following `symbols` from the root.
    ///
    /// Fails with `InvalidArgument` (named after `argument`) when `symbols` is empty.
    pub fn find<I>(&self, symbols: I, argument: &'static str) -> NiihauTrieResult<Option<NodeId>>
    where
        I: IntoIterator<Item = K>,
    {
        let symbols = non_empty(symbols, argument)?;
        let mut current = ROOT;
        for symbol in symbols {
            match self.child(current, &symbol) {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// Terminal node storing exactly `symbols`.
    pub fn find_terminal<I>(&self, symbols: I) -> NiihauTrieResult<Option<NodeId>>
    where
        I: IntoIterator<Item = K>,
    {
        Ok(self
            .find(symbols, "word")?
            .filter(|&id| self.arena.get(id).is_terminal()))
    }

    /// Word and value stored for `symbols`.
    pub fn entry<I>(&self, symbols: I) -> NiihauTrieResult<Option<(&W, &V)>>
    where
        I: IntoIterator<Item = K>,
    {
        Ok(self
            .find_terminal(symbols)?
            .and_then(|id| self.arena.get(id).entry()))
    }

    pub fn value_mut<I>(&mut self, symbols: I) -> NiihauTrieResult<Option<&mut V>>
    where
        I: IntoIterator<Item = K>,
    {
        match self.find_terminal(symbols)? {
            Some(id) => Ok(self.arena.get_mut(id).value_mut()),
            None => Ok(None),
        }
    }

    /// Deepest terminal node on the path spelled by `input`.
    ///
    /// One linear pass: stops at the first missing edge or when `input` runs out.
    pub fn longest_prefix<I>(&self, input: I) -> NiihauTrieResult<Option<NodeId>>
    where
        I: IntoIterator<Item = K>,
    {
        let input = non_empty(input, "input")?;
        let mut current = ROOT;
        let mut longest = None;
        for symbol in input {
            match self.child(current, &symbol) {
                Some(next) => current = next,
                None => break,
            }
            if self.arena.get(current).is_terminal() {
                longest = Some(current);
            }
        }
        Ok(longest)
    }

    /// Stores `symbols` with `value`.
    ///
    /// Missing internal nodes are created along the way. If the last node
    /// already exists as an internal node (a longer word runs through it), it is
    /// replaced by a terminal node that adopts its children.
    pub fn insert<F>(
        &mut self,
        symbols: &[K],
        word: F,
        value: V,
        on_existing: OnExisting,
    ) -> NiihauTrieResult<Insertion<V>>
    where
        K: Clone,
        F: FnOnce() -> W,
    {
        let Some((last, init)) = symbols.split_last() else {
            return Err(NiihauTrieError::empty("word"));
        };

        let mut parent = ROOT;
        for symbol in init {
            parent = match self.child(parent, symbol) {
                Some(next) => next,
                None => self.link(parent, TrieNode::internal(symbol.clone())),
            };
        }

        let Some(existing) = self.child(parent, last) else {
            self.link(parent, TrieNode::terminal(last.clone(), Vec::new(), word(), value));
            self.count += 1;
            return Ok(Insertion::Added);
        };

        if let Some(stored) = self.arena.get_mut(existing).value_mut() {
            return Ok(match on_existing {
                OnExisting::Keep => Insertion::Exists(value),
                OnExisting::Overwrite => Insertion::Replaced(std::mem::replace(stored, value)),
            });
        }

        match self.arena.replace(existing, TrieNode::Vacant) {
            TrieNode::Internal { key, children } => {
                trace!(node = existing, children = children.len(), "promoting internal node to terminal");
                self.arena
                    .replace(existing, TrieNode::terminal(key, children, word(), value));
                self.count += 1;
                Ok(Insertion::Added)
            }
            // Only internal and terminal nodes are ever linked as children.
            other => {
                self.arena.replace(existing, other);
                Ok(Insertion::Exists(value))
            }
        }
    }

    /// Removes the word spelled by `symbols`, returning its word and value.
    ///
    /// A childless terminal node is unlinked together with every ancestor that
    /// is left without children, stopping at the first ancestor that is itself
    /// a word (or still leads to other words). A terminal node with children is
    /// replaced by an internal node that keeps them.
    pub fn remove<I>(&mut self, symbols: I) -> NiihauTrieResult<Option<(W, V)>>
    where
        I: IntoIterator<Item = K>,
    {
        let symbols = non_empty(symbols, "word")?;

        let mut path = vec![ROOT];
        let mut current = ROOT;
        for symbol in symbols {
            match self.child(current, &symbol) {
                Some(next) => {
                    path.push(next);
                    current = next;
                }
                None => return Ok(None),
            }
        }

        let Some(target) = path.pop() else {
            return Ok(None);
        };
        let node = self.arena.get(target);
        if !node.is_terminal() {
            return Ok(None);
        }

        let removed = if node.children().is_empty() {
            let removed = self.arena.release(target);
            self.prune(target, path);
            removed.into_entry()
        } else {
            self.demote(target)
        };

        if removed.is_some() {
            self.count -= 1;
        }
        Ok(removed)
    }

    /// Unlinks `child` and then every ancestor on `path` left without children.
    fn prune(&mut self, mut child: NodeId, mut path: Vec<NodeId>) {
        while let Some(parent) = path.pop() {
            let node = self.arena.get_mut(parent);
            node.remove_child(child);
            if parent == ROOT || node.is_terminal() || !node.children().is_empty() {
                break;
            }
            trace!(node = parent, "pruning empty branch node");
            self.arena.release(parent);
            child = parent;
        }
    }

    /// Replaces the terminal node in slot `id` by an internal node that keeps
    /// its key and children, returning the terminal's word and value.
    fn demote(&mut self, id: NodeId) -> Option<(W, V)> {
        match self.arena.replace(id, TrieNode::Vacant) {
            TrieNode::Terminal {
                key,
                children,
                word,
                value,
            } => {
                trace!(node = id, children = children.len(), "demoting terminal node to internal");
                self.arena.replace(id, TrieNode::Internal { key, children });
                Some((word, value))
            }
            other => {
                self.arena.replace(id, other);
                None
            }
        }
    }

    /// Allocates `node` and appends it to `parent`'s children.
    fn link(&mut self, parent: NodeId, node: TrieNode<K, W, V>) -> NodeId {
        let id = self.arena.alloc(node);
        self.arena.get_mut(parent).add_child(id);
        id
    }
}

impl<K, W, V, C> Clone for TrieCore<K, W, V, C>
where
    K: Clone,
    W: Clone,
    V: Clone,
    C: Clone,
{
    /// Clones the nodes; the clone starts with an empty buffer pool.
    fn clone(&self) -> Self {
        Self {
            arena: self.arena.clone(),
            comparer: self.comparer.clone(),
            count: self.count,
            pool: QueuePool::new(self.pool.capacity(), self.pool.queue_capacity()),
        }
    }
}

/// Peekable view of `symbols`, or `InvalidArgument` if there are none.
fn non_empty<I>(symbols: I, argument: &'static str) -> NiihauTrieResult<Peekable<I::IntoIter>>
where
    I: IntoIterator,
{
    let mut symbols = symbols.into_iter().peekable();
    if symbols.peek().is_none() {
        return Err(NiihauTrieError::empty(argument));
    }
    Ok(symbols)
}
