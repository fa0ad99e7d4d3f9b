//! Vocabulary loading.
//!
//! Turns a word-per-line text file into a [`NiihauTrie`], honoring the
//! trimming and comment rules of a [`LoaderConfig`].

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::LoaderConfig;
use crate::data_structures::niihau_trie::{CaseRule, NiihauTrie, NiihauTrieConfig};
use crate::error::MaukaResult;

/// Words of `text`, one per line, in file order.
///
/// Blank lines and (if enabled) comment lines are skipped. Duplicates are kept;
/// the trie drops them on insertion.
pub fn parse_words<'a>(text: &'a str, config: &'a LoaderConfig) -> impl Iterator<Item = &'a str> + 'a {
    text.lines()
        .map(move |line| if config.trim_lines { line.trim() } else { line })
        .filter(move |line| {
            !line.is_empty()
                && !(config.skip_comments && line.starts_with(config.comment_prefix.as_str()))
        })
}

/// Reads every word of the file at `path`.
pub fn read_words<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> MaukaResult<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let words: Vec<String> = parse_words(&text, config).map(str::to_owned).collect();
    debug!(path = %path.display(), words = words.len(), "read vocabulary");
    Ok(words)
}

/// Loads the file at `path` into a new trie built from `trie_config`.
pub fn load_trie<P: AsRef<Path>>(
    path: P,
    trie_config: &NiihauTrieConfig,
    loader_config: &LoaderConfig,
) -> MaukaResult<NiihauTrie<CaseRule>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;

    let mut trie = NiihauTrie::with_config(trie_config.clone());
    let added = trie.add_range(parse_words(&text, loader_config))?;

    info!(
        path = %path.display(),
        words = added,
        nodes = trie.node_count(),
        "vocabulary loaded"
    );
    Ok(trie)
}
