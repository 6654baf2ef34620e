//! Dictionary of valid words
//!
//! Keeps the words in their original order (for listing solutions) alongside a
//! hash set for constant-time membership checks.

use log::debug;
use rustc_hash::FxHashSet;

/// Ordered, deduplicated list of uppercase words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries are trimmed and uppercased. Empty entries, entries with anything
    /// other than ASCII letters, and repeats are dropped; first occurrence wins.
    ///
    /// # Examples
    /// ```
    /// use countdown_letters::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["cat", "Cat", "don't", "dog"]);
    /// assert_eq!(dict.words(), ["CAT", "DOG"]);
    /// assert!(dict.contains("cat"));
    /// ```
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        let mut skipped = 0usize;

        for entry in entries {
            let trimmed = entry.as_ref().trim();
            if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
                skipped += 1;
                continue;
            }

            let word = trimmed.to_ascii_uppercase();
            if dict.index.insert(word.clone()) {
                dict.words.push(word);
            }
        }

        if skipped > 0 {
            debug!("Skipped {skipped} entries that are not plain words");
        }

        dict
    }

    /// Check whether `word` is in the dictionary, ignoring case
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.trim().to_ascii_uppercase())
    }

    /// All words in first-seen order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
