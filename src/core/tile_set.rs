//! Letters in play
//!
//! A `TileSet` collects the tiles drawn for a round and answers whether a word
//! can be spelled from them. Each held tile can be used at most once, so a
//! word needing two S tiles only fits when two S tiles are held.

use super::{LetterCounts, TileError};
use std::fmt;

/// Growable multiset of uppercase letters
///
/// Insertion order is kept for display but plays no part in equality or matching.
#[derive(Debug, Clone, Default)]
pub struct TileSet {
    letters: Vec<char>,
}

/// Validate a word for matching and return it uppercased
fn normalize_word(word: &str) -> Result<String, TileError> {
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(TileError::InvalidWord(word.to_string()));
    }
    Ok(word.to_ascii_uppercase())
}

/// Parse a one-character string as a letter, uppercased
///
/// # Errors
/// Returns `TileError::InvalidLetter` unless `input` is exactly one ASCII letter.
pub fn parse_letter(input: &str) -> Result<char, TileError> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(TileError::InvalidLetter(input.to_string())),
    }
}

impl TileSet {
    /// Create an empty tile set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: Vec::new(),
        }
    }

    /// Build a tile set from a string of letters, e.g. `"catseronb"`
    ///
    /// # Errors
    /// Returns `TileError::InvalidLetter` for the first character that is not an ASCII letter.
    pub fn from_letters(letters: &str) -> Result<Self, TileError> {
        let mut set = Self::new();
        for c in letters.chars() {
            set.insert(c)?;
        }
        Ok(set)
    }

    /// Add a tile, normalized to uppercase
    ///
    /// # Errors
    /// Returns `TileError::InvalidLetter` if `letter` is not an ASCII letter.
    pub fn insert(&mut self, letter: char) -> Result<(), TileError> {
        if !letter.is_ascii_alphabetic() {
            return Err(TileError::InvalidLetter(letter.to_string()));
        }
        self.letters.push(letter.to_ascii_uppercase());
        Ok(())
    }

    /// Add a tile given as a one-character string
    ///
    /// # Errors
    /// Returns `TileError::InvalidLetter` unless `letter` is exactly one ASCII letter.
    pub fn insert_str(&mut self, letter: &str) -> Result<(), TileError> {
        let c = parse_letter(letter)?;
        self.letters.push(c);
        Ok(())
    }

    /// Check whether `word` can be spelled from the held tiles
    ///
    /// Letter order in `word` is irrelevant; each held tile is used at most once.
    /// Matching is case-insensitive.
    ///
    /// # Errors
    /// Returns `TileError::InvalidWord` if `word` is empty or contains non-letters.
    ///
    /// # Examples
    /// ```
    /// use countdown_letters::core::TileSet;
    ///
    /// let tiles = TileSet::from_letters("CATSERONB").unwrap();
    /// assert!(tiles.can_assemble("score").unwrap());
    /// assert!(!tiles.can_assemble("boss").unwrap());
    /// assert!(tiles.can_assemble("c4t").is_err());
    /// ```
    pub fn can_assemble(&self, word: &str) -> Result<bool, TileError> {
        let word = normalize_word(word)?;

        if word.len() > self.letters.len() {
            return Ok(false);
        }

        let mut available = self.counts();
        Ok(word.chars().all(|c| available.take(c)))
    }

    /// Number of tiles held
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Snapshot of the held tiles in insertion order
    #[must_use]
    pub fn to_vec(&self) -> Vec<char> {
        self.letters.clone()
    }

    /// Iterate over the held tiles in insertion order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    /// Multiplicities of the held tiles
    #[must_use]
    pub fn counts(&self) -> LetterCounts {
        LetterCounts::from_letters(self.iter())
    }

    /// Remove every tile
    pub fn clear(&mut self) {
        self.letters.clear();
    }
}

impl PartialEq for TileSet {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.counts() == other.counts()
    }
}

impl Eq for TileSet {}

impl fmt::Display for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, letter) in self.letters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{letter}\"")?;
        }
        write!(f, "}}")
    }
}
