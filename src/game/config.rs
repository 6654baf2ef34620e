//! Round configuration

use super::RoundError;
use crate::core::{Category, LetterTables};
use std::time::Duration;

/// Parameters of a letters round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Tiles drawn per round
    pub tile_count: usize,
    /// Most consonants a player may pick
    pub max_consonants: usize,
    /// Most vowels a player may pick
    pub max_vowels: usize,
    /// Thinking time once the tiles are revealed
    pub time_limit: Duration,
}

impl GameConfig {
    /// Limit for `category`
    #[must_use]
    pub const fn max_for(&self, category: Category) -> usize {
        match category {
            Category::Consonant => self.max_consonants,
            Category::Vowel => self.max_vowels,
        }
    }

    /// Check that a round with these parameters can always be completed
    ///
    /// # Errors
    /// Returns `RoundError::InvalidConfig` if:
    /// - `tile_count` is zero
    /// - `time_limit` is zero
    /// - either limit exceeds `tile_count`
    /// - the limits together cannot reach `tile_count`
    /// - a limit exceeds the size of its pile
    pub fn validate(&self, tables: &LetterTables) -> Result<(), RoundError> {
        if self.tile_count == 0 {
            return Err(RoundError::InvalidConfig(
                "tile count must be greater than zero".to_string(),
            ));
        }

        if self.time_limit.is_zero() {
            return Err(RoundError::InvalidConfig(
                "time limit must be greater than zero".to_string(),
            ));
        }

        for category in Category::ALL {
            let max = self.max_for(category);
            if max > self.tile_count {
                return Err(RoundError::InvalidConfig(format!(
                    "{max} {category}s allowed but only {} tiles drawn",
                    self.tile_count
                )));
            }

            let pile_size = tables.get(category).total();
            if max > pile_size {
                return Err(RoundError::InvalidConfig(format!(
                    "{max} {category}s allowed but the pile only holds {pile_size}"
                )));
            }
        }

        if self.max_consonants + self.max_vowels < self.tile_count {
            return Err(RoundError::InvalidConfig(format!(
                "{} consonants plus {} vowels cannot fill {} tiles",
                self.max_consonants, self.max_vowels, self.tile_count
            )));
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: 9,
            max_consonants: 6,
            max_vowels: 5,
            time_limit: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FrequencyTable;

    #[test]
    fn default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.tile_count, 9);
        assert_eq!(config.max_consonants, 6);
        assert_eq!(config.max_vowels, 5);
        assert!(config.validate(&LetterTables::standard()).is_ok());
    }

    #[test]
    fn zero_tiles_is_invalid() {
        let config = GameConfig {
            tile_count: 0,
            ..GameConfig::default()
        };
        assert!(config.validate(&LetterTables::standard()).is_err());
    }

    #[test]
    fn zero_time_limit_is_invalid() {
        let config = GameConfig {
            time_limit: Duration::ZERO,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(&LetterTables::standard()),
            Err(RoundError::InvalidConfig(msg)) if msg.contains("time limit")
        ));

        let config = GameConfig {
            time_limit: Duration::from_millis(1),
            ..GameConfig::default()
        };
        assert!(config.validate(&LetterTables::standard()).is_ok());
    }

    #[test]
    fn limits_must_reach_tile_count() {
        let config = GameConfig {
            max_consonants: 4,
            max_vowels: 4,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(&LetterTables::standard()),
            Err(RoundError::InvalidConfig(_))
        ));
    }

    #[test]
    fn limit_above_tile_count_is_invalid() {
        let config = GameConfig {
            max_vowels: 10,
            ..GameConfig::default()
        };
        assert!(config.validate(&LetterTables::standard()).is_err());
    }

    #[test]
    fn limit_above_pile_size_is_invalid() {
        let tables = LetterTables::new(
            FrequencyTable::standard(Category::Consonant),
            FrequencyTable::new(Category::Vowel, &[('A', 2), ('E', 2)]).unwrap(),
        )
        .unwrap();
        assert!(GameConfig::default().validate(&tables).is_err());
    }

    #[test]
    fn max_for_category() {
        let config = GameConfig::default();
        assert_eq!(config.max_for(Category::Consonant), 6);
        assert_eq!(config.max_for(Category::Vowel), 5);
    }
}
