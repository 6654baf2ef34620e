//! Letter multiplicity counts
//!
//! A fixed 26-slot histogram over `A..=Z`. It gives an order-independent view of
//! any collection of tiles, which is what both equality and the assemblability
//! test need.

/// Number of letters in the alphabet
pub const ALPHABET_LENGTH: usize = 26;

/// Per-letter tile counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts([u32; ALPHABET_LENGTH]);

/// Slot for an uppercase ASCII letter
#[inline]
fn slot(letter: char) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| (letter as u8 - b'A') as usize)
}

impl LetterCounts {
    /// Empty histogram
    #[must_use]
    pub const fn new() -> Self {
        Self([0; ALPHABET_LENGTH])
    }

    /// Count the uppercase letters yielded by `letters`
    ///
    /// Anything that is not an uppercase ASCII letter is ignored.
    pub fn from_letters<I: IntoIterator<Item = char>>(letters: I) -> Self {
        let mut counts = Self::new();
        for letter in letters {
            counts.add(letter);
        }
        counts
    }

    /// Add one occurrence of `letter`
    #[inline]
    pub fn add(&mut self, letter: char) {
        if let Some(i) = slot(letter) {
            self.0[i] += 1;
        }
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` (and leaves the counts alone) if none is left.
    #[inline]
    pub fn take(&mut self, letter: char) -> bool {
        match slot(letter) {
            Some(i) if self.0[i] > 0 => {
                self.0[i] -= 1;
                true
            }
            _ => false,
        }
    }

    /// Occurrences of `letter`
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> u32 {
        slot(letter).map_or(0, |i| self.0[i])
    }

    /// Total number of letters counted
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Whether every letter of `other` is available here at least as many times
    ///
    /// # Examples
    /// ```
    /// use countdown_letters::core::LetterCounts;
    ///
    /// let held = LetterCounts::from_letters("BOSE".chars());
    /// assert!(held.covers(&LetterCounts::from_letters("SOB".chars())));
    /// assert!(!held.covers(&LetterCounts::from_letters("BOSS".chars())));
    /// ```
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(have, need)| have >= need)
    }

    /// Iterate over `(letter, count)` for the letters that occur
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(i, &count)| ((b'A' + i as u8) as char, count))
    }
}
