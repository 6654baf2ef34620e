//! Word lists for the letters round
//!
//! Provides the embedded default word list, a dictionary type for membership
//! checks, and loaders for word files.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_fit_on_nine_tiles() {
        for &word in WORDS {
            assert!(word.len() <= 9, "Word '{word}' is longer than nine letters");
        }
    }

    #[test]
    fn words_have_no_duplicates() {
        let dict = Dictionary::from_words(WORDS);
        assert_eq!(dict.len(), WORDS_COUNT);
    }
}
