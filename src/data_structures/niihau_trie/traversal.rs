//! Lazy, read-only enumeration of stored words.
//!
//! All queries funnel into [`Terminals`], which walks "seed" nodes located by
//! either an exact prefix descent or a wildcard pattern search. In prefix mode
//! it yields each seed (if it is a word) followed by every word below it, in
//! breadth-first order; in exact mode it yields only the seeds that are words.
//!
//! The walks rent their queues from the trie's pool and return them when the
//! iterator is dropped, so partially consumed results leave nothing behind.
//! Iterators borrow the trie, which rules out mutation while one is alive.

use std::iter::FusedIterator;

use super::comparer::KeyComparer;
use super::engine::TrieCore;
use super::node::{NodeId, ROOT};
use super::pool::PooledQueue;
use super::{NiihauTrieError, NiihauTrieResult};

/// Whether located nodes stand for themselves or for their whole subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WalkMode {
    /// Yield located nodes that are words
    Exact,
    /// Yield located nodes that are words, then every word beneath them
    Prefix,
}

impl<K, W, V, C> TrieCore<K, W, V, C>
where
    C: KeyComparer<K>,
{
    /// Words starting with the literal `prefix`.
    pub fn walk_prefix<I>(&self, prefix: I) -> NiihauTrieResult<Terminals<'_, K, W, V, C>>
    where
        I: IntoIterator<Item = K>,
    {
        let start = self.find(prefix, "prefix")?;
        Ok(Terminals::new(self, Seeds::Node(start), WalkMode::Prefix))
    }

    /// Words selected by a wildcard pattern (`None` matches any symbol).
    pub fn walk_pattern(
        &self,
        pattern: Vec<Option<K>>,
        mode: WalkMode,
    ) -> NiihauTrieResult<Terminals<'_, K, W, V, C>> {
        if pattern.is_empty() {
            return Err(NiihauTrieError::empty("pattern"));
        }
        let nodes = PatternNodes::new(self, pattern);
        Ok(Terminals::new(self, Seeds::Pattern(nodes), mode))
    }

    /// Every stored word.
    pub fn walk_all(&self) -> Terminals<'_, K, W, V, C> {
        Terminals::new(self, Seeds::Node(Some(ROOT)), WalkMode::Prefix)
    }
}

/// Source of the nodes a [`Terminals`] walk starts from.
#[derive(Debug)]
enum Seeds<'a, K, W, V, C> {
    /// A single node from an exact descent (`None` if the descent failed)
    Node(Option<NodeId>),
    /// Nodes matched by a pattern search
    Pattern(PatternNodes<'a, K, W, V, C>),
}

impl<K, W, V, C> Iterator for Seeds<'_, K, W, V, C>
where
    C: KeyComparer<K>,
{
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        match self {
            Self::Node(node) => node.take(),
            Self::Pattern(nodes) => nodes.next(),
        }
    }
}

/// Breadth-first search over `(node, pattern position)` pairs.
///
/// A literal advances along the single matching edge, a wildcard along every
/// edge. Yields the nodes reached once the whole pattern is consumed.
#[derive(Debug)]
pub(crate) struct PatternNodes<'a, K, W, V, C> {
    core: &'a TrieCore<K, W, V, C>,
    pattern: Vec<Option<K>>,
    queue: PooledQueue<'a>,
}

impl<'a, K, W, V, C> PatternNodes<'a, K, W, V, C>
where
    C: KeyComparer<K>,
{
    fn new(core: &'a TrieCore<K, W, V, C>, pattern: Vec<Option<K>>) -> Self {
        let mut queue = core.pool.rent();
        queue.push_back((ROOT, 0));
        Self {
            core,
            pattern,
            queue,
        }
    }
}

impl<K, W, V, C> Iterator for PatternNodes<'_, K, W, V, C>
where
    C: KeyComparer<K>,
{
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let Some((node, position)) = self.queue.pop_front() {
            let Some(symbol) = self.pattern.get(position) else {
                return Some(node);
            };
            match symbol {
                Some(symbol) => {
                    if let Some(child) = self.core.child(node, symbol) {
                        self.queue.push_back((child, position + 1));
                    }
                }
                None => {
                    let children = self.core.arena.get(node).children();
                    self.queue
                        .extend(children.iter().map(|&child| (child, position + 1)));
                }
            }
        }
        None
    }
}

impl<K, W, V, C> FusedIterator for PatternNodes<'_, K, W, V, C> where C: KeyComparer<K> {}

/// Lazy iterator over stored `(word, value)` pairs.
#[derive(Debug)]
pub struct Terminals<'a, K, W, V, C> {
    core: &'a TrieCore<K, W, V, C>,
    seeds: Seeds<'a, K, W, V, C>,
    /// Descendant queue, only rented in prefix mode
    queue: Option<PooledQueue<'a>>,
}

impl<'a, K, W, V, C> Terminals<'a, K, W, V, C>
where
    C: KeyComparer<K>,
{
    fn new(core: &'a TrieCore<K, W, V, C>, seeds: Seeds<'a, K, W, V, C>, mode: WalkMode) -> Self {
        let queue = match mode {
            WalkMode::Exact => None,
            WalkMode::Prefix => Some(core.pool.rent()),
        };
        Self { core, seeds, queue }
    }
}

impl<'a, K, W, V, C> Iterator for Terminals<'a, K, W, V, C>
where
    C: KeyComparer<K>,
{
    type Item = (&'a W, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let core = self.core;
        loop {
            let Some(queue) = self.queue.as_mut() else {
                let seed = self.seeds.next()?;
                match core.arena.get(seed).entry() {
                    Some(entry) => return Some(entry),
                    None => continue,
                }
            };

            match queue.pop_front() {
                Some((id, _)) => {
                    let node = core.arena.get(id);
                    queue.extend(node.children().iter().map(|&child| (child, 0)));
                    if let Some(entry) = node.entry() {
                        return Some(entry);
                    }
                }
                None => {
                    let seed = self.seeds.next()?;
                    queue.push_back((seed, 0));
                }
            }
        }
    }
}

impl<K, W, V, C> FusedIterator for Terminals<'_, K, W, V, C> where C: KeyComparer<K> {}
