//! Shuffled draw pile for one letter category
//!
//! A pile starts as its frequency table expanded into individual tiles, then
//! shuffled. Tiles come off the top one at a time until the pile is reset.
//!
//! Invariant: `remaining_count() + drawn_count() == table().total()`.

use super::{Category, FrequencyTable, LetterCounts, TileError};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::fmt;

/// A depleting, randomly ordered supply of tiles
///
/// The table (and so the category) is fixed at construction. [`DrawPile::reset`]
/// always rebuilds from that same table.
#[derive(Debug, Clone)]
pub struct DrawPile {
    table: FrequencyTable,
    tiles: Vec<char>,
    drawn: usize,
    rng: StdRng,
}

impl DrawPile {
    /// Create a full pile from the standard table for `category`
    #[must_use]
    pub fn new(category: Category) -> Self {
        Self::from_table(FrequencyTable::standard(category), StdRng::from_os_rng())
    }

    /// Create a full pile from the standard table with a deterministic shuffle
    ///
    /// # Examples
    /// ```
    /// use countdown_letters::core::{Category, DrawPile};
    ///
    /// let a = DrawPile::seeded(Category::Vowel, 7);
    /// let b = DrawPile::seeded(Category::Vowel, 7);
    /// assert_eq!(a.to_vec(), b.to_vec());
    /// assert_eq!(a.remaining_count(), 42);
    /// ```
    #[must_use]
    pub fn seeded(category: Category, seed: u64) -> Self {
        Self::from_table(FrequencyTable::standard(category), StdRng::seed_from_u64(seed))
    }

    /// Create a full pile from an arbitrary table and random source
    #[must_use]
    pub fn from_table(table: FrequencyTable, rng: StdRng) -> Self {
        let mut pile = Self {
            table,
            tiles: Vec::new(),
            drawn: 0,
            rng,
        };
        pile.refill();
        pile
    }

    fn refill(&mut self) {
        self.tiles = self.table.expand();
        self.tiles.shuffle(&mut self.rng);
        self.drawn = 0;
        debug!(
            "Built {} pile with {} tiles",
            self.table.category(),
            self.tiles.len()
        );
    }

    /// Take the top tile
    ///
    /// # Errors
    /// Returns `TileError::EmptyPile` if no tiles remain. The pile is unchanged.
    pub fn draw(&mut self) -> Result<char, TileError> {
        let letter = self
            .tiles
            .pop()
            .ok_or(TileError::EmptyPile(self.category()))?;
        self.drawn += 1;
        Ok(letter)
    }

    /// Put every tile back and shuffle again
    pub fn reset(&mut self) {
        self.refill();
    }

    /// Reorder the remaining tiles without returning drawn ones
    pub fn shuffle(&mut self) {
        self.tiles.shuffle(&mut self.rng);
    }

    /// Tiles still in the pile
    #[inline]
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.tiles.len()
    }

    /// Tiles drawn since construction or the last reset
    #[inline]
    #[must_use]
    pub const fn drawn_count(&self) -> usize {
        self.drawn
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn category(&self) -> Category {
        self.table.category()
    }

    /// Table the pile is built from
    #[inline]
    #[must_use]
    pub const fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// Snapshot of the remaining tiles, bottom first (the last element is drawn next)
    #[must_use]
    pub fn to_vec(&self) -> Vec<char> {
        self.tiles.clone()
    }

    /// Iterate over the remaining tiles, bottom first
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.tiles.iter().copied()
    }

    /// Multiplicities of the remaining tiles
    #[must_use]
    pub fn counts(&self) -> LetterCounts {
        LetterCounts::from_letters(self.iter())
    }
}

/// Piles are equal when they hold the same tiles, whatever their order, category or history
impl PartialEq for DrawPile {
    fn eq(&self, other: &Self) -> bool {
        self.remaining_count() == other.remaining_count() && self.counts() == other.counts()
    }
}

impl Eq for DrawPile {}

impl fmt::Display for DrawPile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, letter) in self.tiles.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{letter}\"")?;
        }
        write!(f, "]")
    }
}
