//! Injected word-membership oracle.
//!
//! Loading and parsing dictionary files is the host's concern; the engine
//! only asks whether a candidate word exists.

use std::collections::HashSet;

/// Read-only dictionary membership. Lookups are case-insensitive;
/// traced words arrive in upper case.
pub trait WordOracle: Send + Sync {
    fn contains(&self, word: &str) -> bool;
}

/// In-memory dictionary backed by a `HashSet`.
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordOracle for WordSet {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_lowercase())
    }
}
