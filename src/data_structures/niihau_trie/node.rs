//! Node model for the Niihau Trie.
//!
//! Nodes live in an index arena ([`NodeArena`]) and refer to their children by
//! [`NodeId`]. There are no parent pointers: walks that need to climb back up
//! (removal) record the ids they visited on an explicit stack.
//!
//! Whether a word ends at a node is encoded in the variant itself. Promoting an
//! internal node to a terminal one (or demoting it back) builds a new variant
//! that takes over the old node's children and is written into the same slot.

/// Index of a node inside a [`NodeArena`].
pub(crate) type NodeId = usize;

/// Slot of the root sentinel. Allocated by [`NodeArena::new`] and never released.
pub(crate) const ROOT: NodeId = 0;

/// A node of the trie.
///
/// `Internal` and `Terminal` are the two kinds of the data model. `Root` is the
/// anchor of the tree (it has no key and can never hold a word, because empty
/// words are rejected) and `Vacant` marks a released arena slot.
#[derive(Debug, Clone)]
pub(crate) enum TrieNode<K, W, V> {
    /// The root sentinel.
    Root {
        /// First symbols of all stored words
        children: Vec<NodeId>,
    },

    /// A pure prefix node; no stored word ends here.
    Internal {
        /// Symbol on the edge from the parent
        key: K,
        /// Child node ids, unordered
        children: Vec<NodeId>,
    },

    /// The last node of a stored word. May still have children.
    Terminal {
        /// Symbol on the edge from the parent
        key: K,
        /// Child node ids, unordered
        children: Vec<NodeId>,
        /// The full stored word
        word: W,
        /// Payload attached to the word (`()` for sets)
        value: V,
    },

    /// A released slot waiting on the free list.
    Vacant,
}

impl<K, W, V> TrieNode<K, W, V> {
    /// Creates a childless internal node.
    pub fn internal(key: K) -> Self {
        Self::Internal {
            key,
            children: Vec::new(),
        }
    }

    /// Creates a terminal node that adopts `children`.
    pub fn terminal(key: K, children: Vec<NodeId>, word: W, value: V) -> Self {
        Self::Terminal {
            key,
            children,
            word,
            value,
        }
    }

    /// Edge symbol of this node, `None` for the root and vacant slots.
    pub fn key(&self) -> Option<&K> {
        match self {
            Self::Internal { key, .. } | Self::Terminal { key, .. } => Some(key),
            Self::Root { .. } | Self::Vacant => None,
        }
    }

    pub fn children(&self) -> &[NodeId] {
        match self {
            Self::Root { children }
            | Self::Internal { children, .. }
            | Self::Terminal { children, .. } => children,
            Self::Vacant => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match self {
            Self::Root { children }
            | Self::Internal { children, .. }
            | Self::Terminal { children, .. } => Some(children),
            Self::Vacant => None,
        }
    }

    /// Adds a child id. Uniqueness of keys is the caller's job.
    pub fn add_child(&mut self, child: NodeId) {
        if let Some(children) = self.children_mut() {
            children.push(child);
        }
    }

    /// Unlinks `child` from this node. Returns `false` if it was not linked.
    pub fn remove_child(&mut self, child: NodeId) -> bool {
        match self.children_mut() {
            Some(children) => match children.iter().position(|&id| id == child) {
                Some(index) => {
                    children.swap_remove(index);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal { .. })
    }

    /// Word and value of a terminal node.
    pub fn entry(&self) -> Option<(&W, &V)> {
        match self {
            Self::Terminal { word, value, .. } => Some((word, value)),
            _ => None,
        }
    }

    /// Consumes a terminal node into its word and value.
    pub fn into_entry(self) -> Option<(W, V)> {
        match self {
            Self::Terminal { word, value, .. } => Some((word, value)),
            _ => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut V> {
        match self {
            Self::Terminal { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// Slab of trie nodes with a free list.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<K, W, V> {
    slots: Vec<TrieNode<K, W, V>>,
    free: Vec<NodeId>,
}

impl<K, W, V> NodeArena<K, W, V> {
    /// Creates an arena holding only the root sentinel.
    pub fn new() -> Self {
        Self {
            slots: vec![TrieNode::Root {
                children: Vec::new(),
            }],
            free: Vec::new(),
        }
    }

    /// Stores `node` in a free slot (or a new one) and returns its id.
    pub fn alloc(&mut self, node: TrieNode<K, W, V>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = node;
                id
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        }
    }

    /// Takes the node out of its slot and puts the slot on the free list.
    pub fn release(&mut self, id: NodeId) -> TrieNode<K, W, V> {
        debug_assert_ne!(id, ROOT, "the root sentinel is never released");
        self.free.push(id);
        std::mem::replace(&mut self.slots[id], TrieNode::Vacant)
    }

    /// Writes `node` into slot `id`, returning the node it replaces.
    pub fn replace(&mut self, id: NodeId, node: TrieNode<K, W, V>) -> TrieNode<K, W, V> {
        std::mem::replace(&mut self.slots[id], node)
    }

    pub fn get(&self, id: NodeId) -> &TrieNode<K, W, V> {
        &self.slots[id]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut TrieNode<K, W, V> {
        &mut self.slots[id]
    }

    /// Number of live nodes, root included.
    pub fn live_nodes(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Drops every node except a fresh root.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.slots.push(TrieNode::Root {
            children: Vec::new(),
        });
    }
}
