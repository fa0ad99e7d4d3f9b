//! Pattern symbols for wildcard queries.

use std::fmt;

/// One position of a search pattern: a literal character or "any character".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Character(Option<char>);

impl Character {
    /// Matches every character.
    pub const ANY: Character = Character(None);

    /// Creates a literal.
    pub const fn new(c: char) -> Self {
        Self(Some(c))
    }

    /// The literal character, `None` for [`Character::ANY`].
    pub const fn char(&self) -> Option<char> {
        self.0
    }

    pub const fn is_any(&self) -> bool {
        self.0.is_none()
    }
}

impl From<char> for Character {
    fn from(c: char) -> Self {
        Self::new(c)
    }
}

impl From<Character> for Option<char> {
    fn from(c: Character) -> Self {
        c.0
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(c) => write!(f, "{c}"),
            None => f.write_str("?"),
        }
    }
}

/// Parses a pattern string where every `wildcard` stands for [`Character::ANY`].
///
/// ```
/// use mauka_trie_lib::data_structures::niihau_trie::{parse_pattern, Character};
///
/// let pattern = parse_pattern("?c??t", '?');
/// assert_eq!(pattern.len(), 5);
/// assert_eq!(pattern[0], Character::ANY);
/// assert_eq!(pattern[1], Character::from('c'));
/// ```
pub fn parse_pattern(pattern: &str, wildcard: char) -> Vec<Character> {
    pattern
        .chars()
        .map(|c| if c == wildcard { Character::ANY } else { Character::new(c) })
        .collect()
}
