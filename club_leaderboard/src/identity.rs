//! Player identity helpers.
//!
//! Season files are maintained by hand, so the same player shows up as
//! `"Иван  Петров"`, `"иван петров"` or with a decomposed `й`. Every lookup and
//! every accumulator in this crate keys players by [`PlayerKey`], while the
//! stored spelling is kept for display.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Normalized player name used as an identity key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerKey(String);

impl PlayerKey {
    /// Build the key for a raw (display) name
    pub fn new(name: &str) -> Self {
        Self(normalize_name(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Normalize a player name for matching
///
/// Applies Unicode NFC, collapses every whitespace run to a single space,
/// trims both ends and lowercases.
///
/// # Example
///
/// ```
/// use club_leaderboard::identity::normalize_name;
///
/// assert_eq!(normalize_name("  Иван \t ПЕТРОВ "), "иван петров");
/// ```
pub fn normalize_name(name: &str) -> String {
    let composed: String = name.nfc().collect();
    composed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Whether two names refer to the same player
pub fn names_match(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}

/// Set of player names removed from every computation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    keys: HashSet<PlayerKey>,
}

impl ExclusionSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = names
            .into_iter()
            .map(|name| PlayerKey::new(name.as_ref()))
            .filter(|key| !key.is_empty())
            .collect();
        Self { keys }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        !self.keys.is_empty() && self.keys.contains(&PlayerKey::new(name))
    }

    pub fn contains_key(&self, key: &PlayerKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
