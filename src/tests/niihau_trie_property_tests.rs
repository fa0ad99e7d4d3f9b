//! Property-based tests for the trie facades.
//!
//! Every property compares the trie against a plain collection model.

use crate::data_structures::niihau_trie::{
    CaseRule, Character, NiihauSequenceTrie, NiihauTrie, NiihauTrieDictionary,
};
use crate::tests::{word_strategy, words_strategy};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

fn build(words: &[String]) -> NiihauTrie {
    let mut trie = NiihauTrie::new();
    trie.add_range(words).unwrap();
    trie
}

fn sorted<'a>(found: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut found: Vec<String> = found.map(str::to_owned).collect();
    found.sort_unstable();
    found
}

fn distinct(words: &[String]) -> BTreeSet<String> {
    words.iter().cloned().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn proptest_add_contains_remove_round_trip(words in words_strategy(40)) {
        let mut trie = build(&words);
        for word in &words {
            prop_assert!(trie.contains(word).unwrap());
        }

        for word in distinct(&words) {
            prop_assert!(trie.remove(&word).unwrap());
            prop_assert!(!trie.contains(&word).unwrap());
        }
        prop_assert!(trie.is_empty());
        prop_assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn proptest_count_is_order_independent(words in words_strategy(40)) {
        let forward = build(&words);
        let reversed: Vec<String> = words.iter().rev().cloned().collect();
        let backward = build(&reversed);

        prop_assert_eq!(forward.len(), distinct(&words).len());
        prop_assert_eq!(backward.len(), forward.len());
        prop_assert_eq!(backward.node_count(), forward.node_count());
        prop_assert_eq!(sorted(forward.iter()), sorted(backward.iter()));
    }

    #[test]
    fn proptest_removing_absent_word_is_a_no_op(words in words_strategy(30), probe in word_strategy()) {
        prop_assume!(!words.contains(&probe));
        let mut trie = build(&words);
        let nodes = trie.node_count();

        prop_assert!(!trie.remove(&probe).unwrap());
        prop_assert_eq!(trie.len(), distinct(&words).len());
        prop_assert_eq!(trie.node_count(), nodes);
    }

    #[test]
    fn proptest_removal_keeps_other_words(words in words_strategy(30), index in any::<prop::sample::Index>()) {
        prop_assume!(!words.is_empty());
        let victim = index.get(&words).clone();
        let mut trie = build(&words);

        prop_assert!(trie.remove(&victim).unwrap());

        let mut expected = distinct(&words);
        expected.remove(&victim);
        prop_assert_eq!(sorted(trie.iter()), expected.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn proptest_prefix_matches_filter(words in words_strategy(40), prefix in word_strategy()) {
        let trie = build(&words);
        let expected: Vec<String> = distinct(&words)
            .into_iter()
            .filter(|word| word.starts_with(prefix.as_str()))
            .collect();

        prop_assert_eq!(sorted(trie.starts_with(&prefix).unwrap()), expected);
    }

    #[test]
    fn proptest_literal_pattern_equals_prefix(words in words_strategy(40), prefix in word_strategy()) {
        let trie = build(&words);
        let pattern: Vec<Character> = prefix.chars().map(Character::from).collect();

        prop_assert_eq!(
            sorted(trie.starts_with_pattern(&pattern).unwrap()),
            sorted(trie.starts_with(&prefix).unwrap())
        );
    }

    #[test]
    fn proptest_wildcard_pattern_matches_filter(
        words in words_strategy(40),
        pattern in proptest::collection::vec(prop::option::of(prop::sample::select(vec!['a', 'b'])), 1..5),
    ) {
        let trie = build(&words);
        let characters: Vec<Character> = pattern
            .iter()
            .map(|c| c.map_or(Character::ANY, Character::new))
            .collect();
        let fits = |word: &str| {
            word.chars()
                .zip(&pattern)
                .all(|(actual, expected)| expected.map_or(true, |e| e == actual))
        };

        let exact: Vec<String> = distinct(&words)
            .into_iter()
            .filter(|w| w.chars().count() == pattern.len() && fits(w.as_str()))
            .collect();
        let prefixed: Vec<String> = distinct(&words)
            .into_iter()
            .filter(|w| w.chars().count() >= pattern.len() && fits(w.as_str()))
            .collect();

        prop_assert_eq!(sorted(trie.matches(&characters).unwrap()), exact);
        prop_assert_eq!(sorted(trie.starts_with_pattern(&characters).unwrap()), prefixed);
    }

    #[test]
    fn proptest_longest_prefix_is_longest_stored_prefix(words in words_strategy(40), input in word_strategy()) {
        let trie = build(&words);
        let expected = distinct(&words)
            .into_iter()
            .filter(|word| input.starts_with(word.as_str()))
            .max_by_key(|word| word.len());

        prop_assert_eq!(
            trie.longest_prefix_match(&input).unwrap().map(str::to_owned),
            expected
        );
    }

    #[test]
    fn proptest_dictionary_set_behaves_like_map(entries in proptest::collection::vec((word_strategy(), any::<u16>()), 0..40)) {
        let mut dict = NiihauTrieDictionary::new();
        let mut model = BTreeMap::new();
        for (word, value) in &entries {
            prop_assert_eq!(dict.set(word, *value).unwrap(), model.insert(word.clone(), *value));
        }

        prop_assert_eq!(dict.len(), model.len());
        let mut stored: Vec<(String, u16)> = dict.iter().map(|(w, v)| (w.to_owned(), *v)).collect();
        stored.sort_unstable();
        prop_assert_eq!(stored, model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn proptest_case_insensitive_lookup(words in words_strategy(30)) {
        let mut trie = NiihauTrie::with_comparer(CaseRule::Insensitive);
        trie.add_range(&words).unwrap();

        for word in &words {
            prop_assert!(trie.contains(&word.to_uppercase()).unwrap());
        }
        prop_assert_eq!(trie.len(), distinct(&words).len());
    }

    #[test]
    fn proptest_sequence_trie_agrees_with_string_trie(words in words_strategy(30)) {
        let trie = build(&words);
        let mut sequences = NiihauSequenceTrie::new();
        for word in &words {
            sequences.try_add(word.as_bytes(), ()).unwrap();
        }

        prop_assert_eq!(sequences.len(), trie.len());
        prop_assert_eq!(sequences.node_count(), trie.node_count());
    }
}
