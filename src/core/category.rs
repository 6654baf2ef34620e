//! Letter categories
//!
//! The alphabet is split into two disjoint partitions: the five vowels and the
//! twenty-one consonants. Each draw pile is built from exactly one of them.

use super::TileError;
use std::fmt;
use std::str::FromStr;

/// Which half of the alphabet a tile comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Consonant,
    Vowel,
}

impl Category {
    /// Both categories, consonants first
    pub const ALL: [Self; 2] = [Self::Consonant, Self::Vowel];

    /// Category of an ASCII letter (either case)
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use countdown_letters::core::Category;
    ///
    /// assert_eq!(Category::of('e'), Some(Category::Vowel));
    /// assert_eq!(Category::of('Y'), Some(Category::Consonant));
    /// assert_eq!(Category::of('?'), None);
    /// ```
    #[must_use]
    pub const fn of(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' | 'E' | 'I' | 'O' | 'U' => Some(Self::Vowel),
            'A'..='Z' => Some(Self::Consonant),
            _ => None,
        }
    }

    /// Get the category name in lowercase
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Consonant => "consonant",
            Self::Vowel => "vowel",
        }
    }

    /// Single-letter key used at the choice prompt
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Consonant => 'C',
            Self::Vowel => 'V',
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = TileError;

    /// Parse a category tag, ignoring case and surrounding whitespace
    ///
    /// Accepts `c`, `consonant`, `consonants`, `v`, `vowel`, `vowels`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "consonant" | "consonants" => Ok(Self::Consonant),
            "v" | "vowel" | "vowels" => Ok(Self::Vowel),
            _ => Err(TileError::InvalidCategory(s.to_string())),
        }
    }
}
