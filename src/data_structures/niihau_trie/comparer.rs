//! Symbol equality rules.
//!
//! A trie compares edge symbols through a [`KeyComparer`] chosen at
//! construction time. Children are found by linear scan, so a comparer only has
//! to answer "are these two symbols the same edge", no hashing or ordering.

/// Equality rule applied to edge symbols.
pub trait KeyComparer<K> {
    /// Returns `true` if `a` and `b` label the same edge.
    fn equals(&self, a: &K, b: &K) -> bool;
}

/// Identity comparison (`PartialEq`). The default for every trie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ordinal;

impl<K: PartialEq> KeyComparer<K> for Ordinal {
    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        a == b
    }
}

/// Case-insensitive comparison using Unicode simple lowercase mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IgnoreCase;

impl KeyComparer<char> for IgnoreCase {
    #[inline]
    fn equals(&self, a: &char, b: &char) -> bool {
        a == b || a.to_lowercase().eq(b.to_lowercase())
    }
}

/// Case-insensitive comparison restricted to ASCII letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IgnoreAsciiCase;

impl KeyComparer<char> for IgnoreAsciiCase {
    #[inline]
    fn equals(&self, a: &char, b: &char) -> bool {
        a.eq_ignore_ascii_case(b)
    }
}

/// Comparison rule picked at runtime, e.g. from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseRule {
    /// Same as [`Ordinal`]
    #[default]
    Sensitive,
    /// Same as [`IgnoreCase`]
    Insensitive,
}

impl CaseRule {
    /// Maps a `case_sensitive` flag to a rule.
    pub fn from_case_sensitive(case_sensitive: bool) -> Self {
        if case_sensitive {
            Self::Sensitive
        } else {
            Self::Insensitive
        }
    }
}

impl KeyComparer<char> for CaseRule {
    #[inline]
    fn equals(&self, a: &char, b: &char) -> bool {
        match self {
            Self::Sensitive => Ordinal.equals(a, b),
            Self::Insensitive => IgnoreCase.equals(a, b),
        }
    }
}

/// Any closure `Fn(&K, &K) -> bool` works as a comparer.
impl<K, F> KeyComparer<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}
