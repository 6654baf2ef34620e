//! Solve and check commands
//!
//! Work on a board given directly as a string of letters instead of one drawn
//! from the piles.

use crate::core::{TileError, TileSet};
use crate::game::{Verdict, judge_guess};
use crate::solver::ranked_solutions;
use crate::wordlists::Dictionary;

/// Result of solving a board
pub struct SolveResult {
    pub tiles: TileSet,
    /// Fitting words, longest first
    pub solutions: Vec<String>,
    /// Number of fitting words before `limit` was applied
    pub total: usize,
}

/// Find the words in `dictionary` that fit `letters`
///
/// # Errors
///
/// Returns `TileError::InvalidLetter` if `letters` contains anything but ASCII letters.
pub fn solve_letters(
    letters: &str,
    dictionary: &Dictionary,
    limit: Option<usize>,
) -> Result<SolveResult, TileError> {
    let tiles = TileSet::from_letters(letters.trim())?;
    let found = ranked_solutions(&tiles, dictionary.words());
    let total = found.len();

    let solutions = found
        .into_iter()
        .take(limit.unwrap_or(total))
        .map(str::to_string)
        .collect();

    Ok(SolveResult {
        tiles,
        solutions,
        total,
    })
}

/// Result of checking one guess
pub struct CheckResult {
    pub tiles: TileSet,
    pub guess: String,
    pub verdict: Verdict,
}

/// Judge `guess` against a board of `letters`
///
/// Full-board bonus applies when the guess uses every letter given.
///
/// # Errors
///
/// Returns `TileError::InvalidLetter` if `letters` contains anything but ASCII letters.
pub fn check_word(
    letters: &str,
    guess: &str,
    dictionary: &Dictionary,
) -> Result<CheckResult, TileError> {
    let tiles = TileSet::from_letters(letters.trim())?;
    let verdict = judge_guess(&tiles, tiles.size(), guess, dictionary);

    Ok(CheckResult {
        tiles,
        guess: guess.trim().to_ascii_uppercase(),
        verdict,
    })
}
