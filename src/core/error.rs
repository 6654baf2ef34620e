//! Errors raised by the tile engine

use super::Category;
use std::fmt;

/// Error type for tile pile and tile set operations
///
/// Every variant except [`TileError::EmptyPile`] signals a malformed argument and is
/// reported before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    /// Category tag that is neither consonant nor vowel
    InvalidCategory(String),
    /// Input that is not exactly one ASCII letter
    InvalidLetter(String),
    /// Word that is empty or contains something other than ASCII letters
    InvalidWord(String),
    /// Frequency table entry that breaks the table rules
    InvalidFrequency(String),
    /// Draw requested from a pile with nothing left in it
    EmptyPile(Category),
}

impl TileError {
    /// Whether this error belongs to the invalid-argument class
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::EmptyPile(_))
    }
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCategory(tag) => {
                write!(f, "'{tag}' is not a letter category (expected consonant or vowel)")
            }
            Self::InvalidLetter(input) => {
                write!(f, "'{input}' is not a single letter character")
            }
            Self::InvalidWord(input) => {
                write!(f, "'{input}' must be non-empty and contain only letters")
            }
            Self::InvalidFrequency(reason) => write!(f, "Invalid frequency table: {reason}"),
            Self::EmptyPile(category) => write!(f, "The {category} pile is empty"),
        }
    }
}

impl std::error::Error for TileError {}
