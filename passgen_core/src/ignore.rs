use serde::Deserialize;
use std::collections::BTreeSet;
use tracing::debug;

/// A single entry of an ignore list, as accepted at the API and config boundary.
///
/// In TOML an entry is either a one-character string or a non-negative integer, so
/// `ignore-characters = ["a", 0, 1]` is valid. Anything else fails to deserialize.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(untagged)]
pub enum IgnoreCharacter {
    Digit(u64),
    Char(char),
}

impl IgnoreCharacter {
    /// The character this entry removes from output.
    ///
    /// Integers above 9 have no single-character form and never match a drawn
    /// character, so they resolve to `None`.
    pub fn as_char(self) -> Option<char> {
        match self {
            IgnoreCharacter::Char(c) => Some(c),
            IgnoreCharacter::Digit(d) => {
                u32::try_from(d).ok().and_then(|d| char::from_digit(d, 10))
            }
        }
    }
}

impl From<char> for IgnoreCharacter {
    fn from(c: char) -> Self {
        IgnoreCharacter::Char(c)
    }
}

impl From<u8> for IgnoreCharacter {
    fn from(d: u8) -> Self {
        IgnoreCharacter::Digit(u64::from(d))
    }
}

impl From<u64> for IgnoreCharacter {
    fn from(d: u64) -> Self {
        IgnoreCharacter::Digit(d)
    }
}

/// Deduplicated set of characters that must never appear in a generated password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    chars: BTreeSet<char>,
}

impl IgnoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves boundary entries into characters, dropping entries without one.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<IgnoreCharacter>,
    {
        let mut chars = BTreeSet::new();
        for entry in entries {
            let entry = entry.into();
            match entry.as_char() {
                Some(c) => {
                    chars.insert(c);
                }
                None => debug!(?entry, "dropping ignore entry with no single-character form"),
            }
        }
        Self { chars }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Returns `true` if every character of `pool` is ignored.
    ///
    /// An empty pool is trivially covered.
    pub fn covers(&self, pool: &[char]) -> bool {
        pool.iter().all(|c| self.chars.contains(c))
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl<T: Into<IgnoreCharacter>> FromIterator<T> for IgnoreSet {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self::from_entries(iter)
    }
}
