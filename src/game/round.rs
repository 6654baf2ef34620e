//! A single letters round
//!
//! The round owns one pile per category and the tiles drawn so far. It enforces
//! the per-round limits, then judges the player's word once every tile is out.

use super::GameConfig;
use crate::core::{Category, DrawPile, LetterTables, TileError, TileSet};
use crate::solver::ranked_solutions;
use crate::wordlists::Dictionary;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// Error type for round orchestration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// Configuration can never produce a complete round
    InvalidConfig(String),
    /// The player already has the maximum number of tiles of this category
    CategoryLimit(Category),
    /// Every tile for this round has been drawn
    RoundComplete,
    /// Failure from a pile or the tile set
    Tile(TileError),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(reason) => write!(f, "Invalid game configuration: {reason}"),
            Self::CategoryLimit(category) => {
                write!(f, "Maximum {category}s reached for this round")
            }
            Self::RoundComplete => write!(f, "All tiles for this round have been drawn"),
            Self::Tile(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for RoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Tile(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TileError> for RoundError {
    fn from(err: TileError) -> Self {
        Self::Tile(err)
    }
}

/// What the player may pick next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Either,
    ConsonantOnly,
    VowelOnly,
    /// No more picks this round
    Complete,
}

impl Choice {
    /// Whether `category` may be drawn
    #[must_use]
    pub const fn allows(self, category: Category) -> bool {
        matches!(
            (self, category),
            (Self::Either, _)
                | (Self::ConsonantOnly, Category::Consonant)
                | (Self::VowelOnly, Category::Vowel)
        )
    }

    /// The only category available, if the choice is forced
    #[must_use]
    pub const fn forced(self) -> Option<Category> {
        match self {
            Self::ConsonantOnly => Some(Category::Consonant),
            Self::VowelOnly => Some(Category::Vowel),
            Self::Either | Self::Complete => None,
        }
    }
}

/// Result of judging a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The guess needs tiles that are not in play
    NotOnBoard,
    /// The guess fits the tiles but is not in the dictionary
    NotAWord,
    Valid { points: usize },
}

/// Points for a valid word: its length, doubled when it uses every tile
#[must_use]
pub const fn points(word_len: usize, tile_count: usize) -> usize {
    if word_len >= tile_count {
        word_len * 2
    } else {
        word_len
    }
}

/// Judge `guess` against `tiles` and `dictionary`
///
/// The tile check comes first. A guess that is not a plain word never fits the board.
#[must_use]
pub fn judge_guess(
    tiles: &TileSet,
    tile_count: usize,
    guess: &str,
    dictionary: &Dictionary,
) -> Verdict {
    let guess = guess.trim();
    if !matches!(tiles.can_assemble(guess), Ok(true)) {
        return Verdict::NotOnBoard;
    }
    if !dictionary.contains(guess) {
        return Verdict::NotAWord;
    }
    Verdict::Valid {
        points: points(guess.len(), tile_count),
    }
}

/// State of one letters round
#[derive(Debug, Clone)]
pub struct Round {
    config: GameConfig,
    consonants: DrawPile,
    vowels: DrawPile,
    tiles: TileSet,
}

impl Round {
    /// Create a round with full piles and no tiles in play
    ///
    /// With a seed, both piles shuffle deterministically.
    ///
    /// # Errors
    /// Returns `RoundError::InvalidConfig` if `config` fails validation against `tables`.
    pub fn new(
        config: GameConfig,
        tables: &LetterTables,
        seed: Option<u64>,
    ) -> Result<Self, RoundError> {
        config.validate(tables)?;

        let mut master = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let consonants = DrawPile::from_table(
            tables.get(Category::Consonant).clone(),
            StdRng::from_rng(&mut master),
        );
        let vowels = DrawPile::from_table(
            tables.get(Category::Vowel).clone(),
            StdRng::from_rng(&mut master),
        );

        Ok(Self {
            config,
            consonants,
            vowels,
            tiles: TileSet::new(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Tiles in play
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    /// Pile for `category`
    #[must_use]
    pub const fn pile(&self, category: Category) -> &DrawPile {
        match category {
            Category::Consonant => &self.consonants,
            Category::Vowel => &self.vowels,
        }
    }

    const fn pile_mut(&mut self, category: Category) -> &mut DrawPile {
        match category {
            Category::Consonant => &mut self.consonants,
            Category::Vowel => &mut self.vowels,
        }
    }

    /// Tiles of `category` picked this round
    #[must_use]
    pub fn picked(&self, category: Category) -> usize {
        self.pile(category).drawn_count()
    }

    /// What may be drawn next
    #[must_use]
    pub fn choice(&self) -> Choice {
        if self.is_complete() {
            Choice::Complete
        } else if self.picked(Category::Consonant) >= self.config.max_consonants {
            Choice::VowelOnly
        } else if self.picked(Category::Vowel) >= self.config.max_vowels {
            Choice::ConsonantOnly
        } else {
            Choice::Either
        }
    }

    /// Whether every tile for the round is in play
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tiles.size() >= self.config.tile_count
    }

    /// Draw a tile from `category` and put it in play
    ///
    /// # Errors
    /// - `RoundError::RoundComplete` if every tile is already drawn
    /// - `RoundError::CategoryLimit` if the category's limit is reached
    /// - `RoundError::Tile` if the pile is empty
    pub fn draw(&mut self, category: Category) -> Result<char, RoundError> {
        let choice = self.choice();
        if choice == Choice::Complete {
            return Err(RoundError::RoundComplete);
        }
        if !choice.allows(category) {
            return Err(RoundError::CategoryLimit(category));
        }

        let letter = self.pile_mut(category).draw()?;
        self.tiles.insert(letter)?;
        debug!("Drew {category} {letter} ({} in play)", self.tiles.size());
        Ok(letter)
    }

    /// Judge `guess` against the tiles in play and `dictionary`
    #[must_use]
    pub fn judge(&self, guess: &str, dictionary: &Dictionary) -> Verdict {
        judge_guess(&self.tiles, self.config.tile_count, guess, dictionary)
    }

    /// Every dictionary word that fits the tiles in play, longest first
    #[must_use]
    pub fn solutions<'d>(&self, dictionary: &'d Dictionary) -> Vec<&'d str> {
        ranked_solutions(&self.tiles, dictionary.words())
    }

    /// Refill both piles and clear the tiles for another round
    pub fn next_round(&mut self) {
        self.consonants.reset();
        self.vowels.reset();
        self.tiles.clear();
        debug!("Started a new round");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FrequencyTable;

    fn round(seed: u64) -> Round {
        Round::new(GameConfig::default(), &LetterTables::standard(), Some(seed)).unwrap()
    }

    fn fixed_tables() -> LetterTables {
        // One letter per category so every draw is known in advance
        LetterTables::new(
            FrequencyTable::new(Category::Consonant, &[('T', 9)]).unwrap(),
            FrequencyTable::new(Category::Vowel, &[('A', 9)]).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn new_round_is_empty() {
        let round = round(1);
        assert!(round.tiles().is_empty());
        assert_eq!(round.choice(), Choice::Either);
        assert_eq!(round.pile(Category::Consonant).remaining_count(), 56);
        assert_eq!(round.pile(Category::Vowel).remaining_count(), 42);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig {
            max_consonants: 2,
            max_vowels: 2,
            ..GameConfig::default()
        };
        assert!(matches!(
            Round::new(config, &LetterTables::standard(), None),
            Err(RoundError::InvalidConfig(_))
        ));
    }

    #[test]
    fn draw_moves_tile_into_play() {
        let mut round = round(2);
        let letter = round.draw(Category::Vowel).unwrap();

        assert_eq!(Category::of(letter), Some(Category::Vowel));
        assert_eq!(round.tiles().to_vec(), vec![letter]);
        assert_eq!(round.pile(Category::Vowel).remaining_count(), 41);
        assert_eq!(round.picked(Category::Vowel), 1);
        assert_eq!(round.picked(Category::Consonant), 0);
    }

    #[test]
    fn consonant_limit_forces_vowels() {
        let mut round = round(3);
        for _ in 0..6 {
            round.draw(Category::Consonant).unwrap();
        }

        assert_eq!(round.choice(), Choice::VowelOnly);
        assert_eq!(
            round.draw(Category::Consonant),
            Err(RoundError::CategoryLimit(Category::Consonant))
        );
        assert!(round.draw(Category::Vowel).is_ok());
    }

    #[test]
    fn vowel_limit_forces_consonants() {
        let mut round = round(4);
        for _ in 0..5 {
            round.draw(Category::Vowel).unwrap();
        }

        assert_eq!(round.choice(), Choice::ConsonantOnly);
        assert_eq!(round.choice().forced(), Some(Category::Consonant));
        assert!(round.draw(Category::Vowel).is_err());
    }

    #[test]
    fn round_completes_at_tile_count() {
        let mut round = round(5);
        for _ in 0..5 {
            round.draw(Category::Consonant).unwrap();
        }
        for _ in 0..4 {
            round.draw(Category::Vowel).unwrap();
        }

        assert!(round.is_complete());
        assert_eq!(round.choice(), Choice::Complete);
        assert_eq!(round.draw(Category::Vowel), Err(RoundError::RoundComplete));
        assert_eq!(round.tiles().size(), 9);
    }

    #[test]
    fn empty_pile_surfaces_as_tile_error() {
        let tables = LetterTables::new(
            FrequencyTable::new(Category::Consonant, &[('T', 6)]).unwrap(),
            FrequencyTable::new(Category::Vowel, &[('A', 5)]).unwrap(),
        )
        .unwrap();
        let config = GameConfig {
            tile_count: 3,
            max_consonants: 3,
            max_vowels: 3,
            ..GameConfig::default()
        };
        let mut round = Round::new(config, &tables, Some(0)).unwrap();

        // Swap in a vowel pile smaller than the vowel limit
        round.vowels = DrawPile::from_table(
            FrequencyTable::new(Category::Vowel, &[('A', 1)]).unwrap(),
            StdRng::seed_from_u64(0),
        );
        round.draw(Category::Vowel).unwrap();
        assert_eq!(
            round.draw(Category::Vowel),
            Err(RoundError::Tile(TileError::EmptyPile(Category::Vowel)))
        );
    }

    #[test]
    fn seeded_rounds_repeat() {
        let mut a = round(42);
        let mut b = round(42);
        for category in [Category::Consonant, Category::Vowel, Category::Consonant] {
            assert_eq!(a.draw(category), b.draw(category));
        }
    }

    #[test]
    fn judge_checks_board_then_dictionary() {
        let mut round = Round::new(GameConfig::default(), &fixed_tables(), Some(0)).unwrap();
        for _ in 0..5 {
            round.draw(Category::Consonant).unwrap();
        }
        for _ in 0..4 {
            round.draw(Category::Vowel).unwrap();
        }
        let dict = Dictionary::from_words(["tat", "at", "tatatatat"]);

        assert_eq!(round.judge("cat", &dict), Verdict::NotOnBoard);
        assert_eq!(round.judge("tata", &dict), Verdict::NotAWord);
        assert_eq!(round.judge("TAT", &dict), Verdict::Valid { points: 3 });
        assert_eq!(round.judge(" at\n", &dict), Verdict::Valid { points: 2 });
        assert_eq!(round.judge("tatatatat", &dict), Verdict::Valid { points: 18 });
        assert_eq!(round.judge("", &dict), Verdict::NotOnBoard);
        assert_eq!(round.judge("a-t", &dict), Verdict::NotOnBoard);
    }

    #[test]
    fn points_double_for_full_board() {
        assert_eq!(points(4, 9), 4);
        assert_eq!(points(8, 9), 8);
        assert_eq!(points(9, 9), 18);
    }

    #[test]
    fn solutions_are_ranked() {
        let mut round = Round::new(GameConfig::default(), &fixed_tables(), Some(0)).unwrap();
        round.draw(Category::Consonant).unwrap();
        round.draw(Category::Vowel).unwrap();
        round.draw(Category::Consonant).unwrap();
        let dict = Dictionary::from_words(["at", "tat", "tatt", "a"]);

        assert_eq!(round.solutions(&dict), ["TAT", "AT", "A"]);
    }

    #[test]
    fn next_round_resets_everything() {
        let mut round = round(6);
        for _ in 0..4 {
            round.draw(Category::Consonant).unwrap();
        }
        round.draw(Category::Vowel).unwrap();

        round.next_round();

        assert!(round.tiles().is_empty());
        assert_eq!(round.picked(Category::Consonant), 0);
        assert_eq!(round.picked(Category::Vowel), 0);
        assert_eq!(round.pile(Category::Consonant).remaining_count(), 56);
        assert_eq!(round.choice(), Choice::Either);
    }

    #[test]
    fn choice_allows() {
        assert!(Choice::Either.allows(Category::Vowel));
        assert!(Choice::VowelOnly.allows(Category::Vowel));
        assert!(!Choice::VowelOnly.allows(Category::Consonant));
        assert!(!Choice::Complete.allows(Category::Consonant));
        assert_eq!(Choice::Either.forced(), None);
    }

    #[test]
    fn round_error_source_chain() {
        use std::error::Error;

        let err = RoundError::from(TileError::EmptyPile(Category::Consonant));
        assert!(err.source().is_some());
        assert!(RoundError::RoundComplete.source().is_none());
    }
}
