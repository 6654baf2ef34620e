//! Solution enumeration
//!
//! Filters a word list down to the words that can be spelled from a tile set.

use crate::core::TileSet;
use rayon::prelude::*;
use std::cmp::Reverse;

/// Words from `words` that can be assembled from `tiles`, in input order
///
/// Entries that are not plain words (empty, or containing non-letters) are
/// skipped rather than reported.
///
/// # Examples
/// ```
/// use countdown_letters::core::TileSet;
/// use countdown_letters::solver::assemblable;
///
/// let tiles = TileSet::from_letters("CATSERONB").unwrap();
/// let words = ["boss", "cat", "score", "zebra"].map(String::from);
/// assert_eq!(assemblable(&tiles, &words), ["cat", "score"]);
/// ```
#[must_use]
pub fn assemblable<'a, S>(tiles: &TileSet, words: &'a [S]) -> Vec<&'a str>
where
    S: AsRef<str> + Sync,
{
    words
        .par_iter()
        .map(AsRef::as_ref)
        .filter(|word| matches!(tiles.can_assemble(word), Ok(true)))
        .collect()
}

/// Sort words longest first, keeping input order within each length
pub fn longest_first(words: &mut [&str]) {
    words.sort_by_key(|word| Reverse(word.len()));
}

/// Words that fit `tiles`, longest first
#[must_use]
pub fn ranked_solutions<'a, S>(tiles: &TileSet, words: &'a [S]) -> Vec<&'a str>
where
    S: AsRef<str> + Sync,
{
    let mut found = assemblable(tiles, words);
    longest_first(&mut found);
    found
}

/// Length of the longest word that fits `tiles`
#[must_use]
pub fn best_length<S>(tiles: &TileSet, words: &[S]) -> Option<usize>
where
    S: AsRef<str> + Sync,
{
    words
        .par_iter()
        .map(AsRef::as_ref)
        .filter(|word| matches!(tiles.can_assemble(word), Ok(true)))
        .map(str::len)
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<String> {
        ["CAT", "BOSS", "SCORE", "CATS", "A", "BARONETS", "ZOO", "NOTE", "C4T", ""]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn assemblable_preserves_input_order() {
        let tiles = TileSet::from_letters("CATSERONB").unwrap();
        let list = words();
        assert_eq!(
            assemblable(&tiles, &list),
            ["CAT", "SCORE", "CATS", "A", "BARONETS", "NOTE"]
        );
    }

    #[test]
    fn assemblable_skips_invalid_entries() {
        let tiles = TileSet::from_letters("CT").unwrap();
        let list = vec!["C4T", "", "CT"];
        assert_eq!(assemblable(&tiles, &list), ["CT"]);
    }

    #[test]
    fn assemblable_with_empty_tiles() {
        let list = words();
        assert!(assemblable(&TileSet::new(), &list).is_empty());
    }

    #[test]
    fn assemblable_matches_case_insensitively() {
        let tiles = TileSet::from_letters("tac").unwrap();
        let list = vec!["cat", "Act", "tack"];
        assert_eq!(assemblable(&tiles, &list), ["cat", "Act"]);
    }

    #[test]
    fn longest_first_is_stable() {
        let mut list = vec!["AB", "ABCD", "CD", "ABC", "EF"];
        longest_first(&mut list);
        assert_eq!(list, ["ABCD", "ABC", "AB", "CD", "EF"]);
    }

    #[test]
    fn ranked_solutions_orders_by_length() {
        let tiles = TileSet::from_letters("CATSERONB").unwrap();
        let list = words();
        assert_eq!(
            ranked_solutions(&tiles, &list),
            ["BARONETS", "SCORE", "CATS", "NOTE", "CAT", "A"]
        );
    }

    #[test]
    fn best_length_finds_longest() {
        let tiles = TileSet::from_letters("CATSERONB").unwrap();
        let list = words();
        assert_eq!(best_length(&tiles, &list), Some(8));
        assert_eq!(best_length(&TileSet::new(), &list), None);
    }
}
