//! Letter frequency tables
//!
//! A table says how many copies of each letter a draw pile starts with. The
//! standard tables follow the tile distribution of English-language Scrabble,
//! split into consonants and vowels. Custom tables can be built for other
//! distributions; they are validated once and immutable afterwards.

use super::{Category, TileError};

/// Consonant distribution of English Scrabble
const STANDARD_CONSONANTS: &[(char, u32)] = &[
    ('B', 2),
    ('C', 2),
    ('D', 4),
    ('F', 2),
    ('G', 3),
    ('H', 2),
    ('J', 1),
    ('K', 1),
    ('L', 4),
    ('M', 2),
    ('N', 6),
    ('P', 2),
    ('Q', 1),
    ('R', 6),
    ('S', 4),
    ('T', 6),
    ('V', 2),
    ('W', 2),
    ('X', 1),
    ('Y', 2),
    ('Z', 1),
];

/// Vowel distribution of English Scrabble
const STANDARD_VOWELS: &[(char, u32)] = &[('A', 9), ('E', 12), ('I', 9), ('O', 8), ('U', 4)];

/// Copy counts for the letters of one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    category: Category,
    entries: Vec<(char, u32)>,
}

impl FrequencyTable {
    /// Build a validated table
    ///
    /// Letters are normalized to uppercase. Entry order is kept.
    ///
    /// # Errors
    /// Returns `TileError::InvalidFrequency` if:
    /// - the table is empty
    /// - a key is not an ASCII letter of `category`
    /// - a weight is zero
    /// - a letter appears twice
    ///
    /// # Examples
    /// ```
    /// use countdown_letters::core::{Category, FrequencyTable};
    ///
    /// let table = FrequencyTable::new(Category::Vowel, &[('a', 2), ('e', 3)]).unwrap();
    /// assert_eq!(table.total(), 5);
    ///
    /// assert!(FrequencyTable::new(Category::Vowel, &[('B', 1)]).is_err());
    /// ```
    pub fn new(category: Category, entries: &[(char, u32)]) -> Result<Self, TileError> {
        if entries.is_empty() {
            return Err(TileError::InvalidFrequency(format!(
                "{category} table has no letters"
            )));
        }

        let mut normalized: Vec<(char, u32)> = Vec::with_capacity(entries.len());
        for &(letter, weight) in entries {
            let upper = letter.to_ascii_uppercase();

            if Category::of(upper) != Some(category) {
                return Err(TileError::InvalidFrequency(format!(
                    "'{letter}' is not a {category}"
                )));
            }
            if weight == 0 {
                return Err(TileError::InvalidFrequency(format!(
                    "'{upper}' has a weight of zero"
                )));
            }
            if normalized.iter().any(|&(existing, _)| existing == upper) {
                return Err(TileError::InvalidFrequency(format!(
                    "'{upper}' is listed more than once"
                )));
            }

            normalized.push((upper, weight));
        }

        Ok(Self {
            category,
            entries: normalized,
        })
    }

    /// Standard Scrabble-derived table for `category`
    #[must_use]
    pub fn standard(category: Category) -> Self {
        let entries = match category {
            Category::Consonant => STANDARD_CONSONANTS,
            Category::Vowel => STANDARD_VOWELS,
        };

        Self {
            category,
            entries: entries.to_vec(),
        }
    }

    /// Category every letter of this table belongs to
    #[inline]
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// `(letter, weight)` pairs in table order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[(char, u32)] {
        &self.entries
    }

    /// Weight of `letter`, zero if it is not in the table
    #[must_use]
    pub fn weight(&self, letter: char) -> u32 {
        let upper = letter.to_ascii_uppercase();
        self.entries
            .iter()
            .find(|&&(l, _)| l == upper)
            .map_or(0, |&(_, w)| w)
    }

    /// Sum of all weights, i.e. the size of a full pile
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, w)| w as usize).sum()
    }

    /// Every letter repeated `weight` times, in table order
    #[must_use]
    pub fn expand(&self) -> Vec<char> {
        let mut letters = Vec::with_capacity(self.total());
        for &(letter, weight) in &self.entries {
            letters.extend(std::iter::repeat_n(letter, weight as usize));
        }
        letters
    }
}

/// One frequency table per category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterTables {
    consonants: FrequencyTable,
    vowels: FrequencyTable,
}

impl LetterTables {
    /// Pair up a consonant table and a vowel table
    ///
    /// # Errors
    /// Returns `TileError::InvalidFrequency` if either table is for the wrong category.
    pub fn new(consonants: FrequencyTable, vowels: FrequencyTable) -> Result<Self, TileError> {
        if consonants.category() != Category::Consonant {
            return Err(TileError::InvalidFrequency(
                "consonant slot holds a vowel table".to_string(),
            ));
        }
        if vowels.category() != Category::Vowel {
            return Err(TileError::InvalidFrequency(
                "vowel slot holds a consonant table".to_string(),
            ));
        }
        Ok(Self { consonants, vowels })
    }

    /// The standard Scrabble-derived tables
    #[must_use]
    pub fn standard() -> Self {
        Self {
            consonants: FrequencyTable::standard(Category::Consonant),
            vowels: FrequencyTable::standard(Category::Vowel),
        }
    }

    /// Table for `category`
    #[must_use]
    pub const fn get(&self, category: Category) -> &FrequencyTable {
        match category {
            Category::Consonant => &self.consonants,
            Category::Vowel => &self.vowels,
        }
    }
}

impl Default for LetterTables {
    fn default() -> Self {
        Self::standard()
    }
}
