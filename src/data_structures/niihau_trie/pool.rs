//! Pool of breadth-first search queues.
//!
//! Every lazy query walks the trie with a queue of `(node, pattern position)`
//! pairs. Queues are rented from the trie's own [`QueuePool`] and handed back
//! by [`PooledQueue`]'s `Drop`, which runs both when an iterator is exhausted
//! and when the caller abandons it early.

use std::collections::VecDeque;
use std::ops::{Deref, DerefMut};

use parking_lot::Mutex;

use super::node::NodeId;

/// BFS frontier: node id plus the pattern position it was reached at.
pub(crate) type Frontier = VecDeque<(NodeId, usize)>;

/// Bounded stash of idle queues.
#[derive(Debug)]
pub(crate) struct QueuePool {
    idle: Mutex<Vec<Frontier>>,
    /// Maximum number of idle queues kept
    capacity: usize,
    /// Initial capacity of freshly allocated queues
    queue_capacity: usize,
}

impl QueuePool {
    pub fn new(capacity: usize, queue_capacity: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::with_capacity(capacity)),
            capacity,
            queue_capacity,
        }
    }

    /// Takes an idle queue or allocates a new one.
    pub fn rent(&self) -> PooledQueue<'_> {
        let queue = self
            .idle
            .lock()
            .pop()
            .unwrap_or_else(|| VecDeque::with_capacity(self.queue_capacity));
        PooledQueue { pool: self, queue }
    }

    fn give_back(&self, mut queue: Frontier) {
        queue.clear();
        let mut idle = self.idle.lock();
        if idle.len() < self.capacity {
            idle.push(queue);
        }
    }

    /// Number of idle queues currently stashed.
    #[cfg(test)]
    pub fn idle(&self) -> usize {
        self.idle.lock().len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }
}

/// A rented queue. Returns itself to the pool on drop.
#[derive(Debug)]
pub(crate) struct PooledQueue<'a> {
    pool: &'a QueuePool,
    queue: Frontier,
}

impl Deref for PooledQueue<'_> {
    type Target = Frontier;

    fn deref(&self) -> &Frontier {
        &self.queue
    }
}

impl DerefMut for PooledQueue<'_> {
    fn deref_mut(&mut self) -> &mut Frontier {
        &mut self.queue
    }
}

impl Drop for PooledQueue<'_> {
    fn drop(&mut self) {
        self.pool.give_back(std::mem::take(&mut self.queue));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rent_and_return() {
        let pool = QueuePool::new(2, 8);
        assert_eq!(pool.idle(), 0);

        {
            let mut queue = pool.rent();
            queue.push_back((1, 0));
            assert_eq!(queue.len(), 1);
        }
        assert_eq!(pool.idle(), 1);

        // A returned queue comes back empty.
        let queue = pool.rent();
        assert!(queue.is_empty());
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn test_pool_is_bounded() {
        let pool = QueuePool::new(1, 4);
        let a = pool.rent();
        let b = pool.rent();
        drop(a);
        drop(b);
        assert_eq!(pool.idle(), 1);
    }

    #[test]
    fn test_zero_capacity_pool_never_stashes() {
        let pool = QueuePool::new(0, 4);
        drop(pool.rent());
        assert_eq!(pool.idle(), 0);
    }
}
