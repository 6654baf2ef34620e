//! Simulate command
//!
//! Plays many rounds with random legal picks and records how long the best
//! available word is each time.

use crate::core::{Category, LetterTables};
use crate::game::{GameConfig, Round, RoundError};
use crate::solver::best_length;
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Chance of picking a vowel when the choice is free
const VOWEL_PICK_RATE: f64 = 0.4;

/// Result of a simulation run
pub struct SimulationResult {
    pub rounds: usize,
    /// Best word length → number of rounds
    pub length_distribution: BTreeMap<usize, usize>,
    /// Rounds where no dictionary word fit at all
    pub unsolvable: usize,
    /// Rounds where some word used every tile
    pub full_boards: usize,
    pub average_best: f64,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Options for a simulation run
pub struct SimulationConfig {
    pub rounds: usize,
    pub seed: Option<u64>,
    pub show_progress: bool,
}

/// Play `rounds` random rounds against `dictionary`
///
/// # Errors
///
/// Returns a `RoundError` if `game` is invalid for `tables`.
pub fn run_simulation(
    dictionary: &Dictionary,
    game: GameConfig,
    tables: &LetterTables,
    options: &SimulationConfig,
) -> Result<SimulationResult, RoundError> {
    let tile_count = game.tile_count;
    let mut round = Round::new(game, tables, options.seed)?;
    let mut picker = options
        .seed
        .map_or_else(StdRng::from_os_rng, |seed| StdRng::seed_from_u64(seed ^ 0x5eed));

    let pb = if options.show_progress {
        ProgressBar::new(options.rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut length_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut unsolvable = 0;
    let mut full_boards = 0;
    let mut total_best = 0;

    for idx in 0..options.rounds {
        round.next_round();

        while !round.is_complete() {
            let category = round.choice().forced().unwrap_or_else(|| {
                if picker.random_bool(VOWEL_PICK_RATE) {
                    Category::Vowel
                } else {
                    Category::Consonant
                }
            });
            round.draw(category)?;
        }

        match best_length(round.tiles(), dictionary.words()) {
            Some(len) => {
                *length_distribution.entry(len).or_insert(0) += 1;
                total_best += len;
                if len == tile_count {
                    full_boards += 1;
                }
            }
            None => unsolvable += 1,
        }

        if idx % 10 == 0 {
            let played = idx + 1;
            pb.set_message(format!("Avg best: {:.2}", total_best as f64 / played as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let rounds = options.rounds;
    Ok(SimulationResult {
        rounds,
        length_distribution,
        unsolvable,
        full_boards,
        average_best: if rounds > 0 {
            total_best as f64 / rounds as f64
        } else {
            0.0
        },
        duration,
        rounds_per_second: rounds as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::embedded;

    fn options(rounds: usize) -> SimulationConfig {
        SimulationConfig {
            rounds,
            seed: Some(17),
            show_progress: false,
        }
    }

    #[test]
    fn simulation_runs() {
        let dict = embedded();
        let result = run_simulation(
            &dict,
            GameConfig::default(),
            &LetterTables::standard(),
            &options(20),
        )
        .unwrap();

        assert_eq!(result.rounds, 20);
        assert!(result.average_best <= 9.0);
        assert!(result.full_boards <= 20);
    }

    #[test]
    fn distribution_sums_to_rounds() {
        let dict = embedded();
        let result = run_simulation(
            &dict,
            GameConfig::default(),
            &LetterTables::standard(),
            &options(25),
        )
        .unwrap();

        let solved: usize = result.length_distribution.values().sum();
        assert_eq!(solved + result.unsolvable, result.rounds);
        for &len in result.length_distribution.keys() {
            assert!((1..=9).contains(&len));
        }
    }

    #[test]
    fn seeded_simulations_repeat() {
        let dict = embedded();
        let run = || {
            run_simulation(
                &dict,
                GameConfig::default(),
                &LetterTables::standard(),
                &options(10),
            )
            .unwrap()
        };

        assert_eq!(run().length_distribution, run().length_distribution);
    }

    #[test]
    fn empty_dictionary_is_unsolvable() {
        let dict = Dictionary::default();
        let result = run_simulation(
            &dict,
            GameConfig::default(),
            &LetterTables::standard(),
            &options(3),
        )
        .unwrap();

        assert_eq!(result.unsolvable, 3);
        assert!(result.length_distribution.is_empty());
        assert!(result.average_best.abs() < f64::EPSILON);
    }

    #[test]
    fn zero_rounds() {
        let dict = embedded();
        let result = run_simulation(
            &dict,
            GameConfig::default(),
            &LetterTables::standard(),
            &options(0),
        )
        .unwrap();

        assert_eq!(result.rounds, 0);
        assert!(result.average_best.abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_config_fails() {
        let dict = embedded();
        let game = GameConfig {
            tile_count: 0,
            ..GameConfig::default()
        };
        assert!(run_simulation(&dict, game, &LetterTables::standard(), &options(1)).is_err());
    }
}
