//! Data structures for Mauka Trie.
//!
//! Everything here is safe Rust; shared read access is plain `&self`
//! borrowing and mutation requires `&mut self`.

pub mod niihau_trie;

// Re-export common data structures
pub use niihau_trie::{
    NiihauSequenceTrie, NiihauTrie, NiihauTrieDictionary, NiihauTrieError, NiihauTrieResult,
};
