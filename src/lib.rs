//! Countdown Letters
//!
//! The letters round of Countdown: weighted consonant and vowel piles, a board of
//! drawn tiles, and multiset matching of dictionary words against that board.
//!
//! # Quick Start
//!
//! ```rust
//! use countdown_letters::core::TileSet;
//! use countdown_letters::solver::ranked_solutions;
//!
//! let tiles = TileSet::from_letters("catseronb").unwrap();
//! assert!(tiles.can_assemble("score").unwrap());
//! assert!(!tiles.can_assemble("boss").unwrap());
//!
//! let words = ranked_solutions(&tiles, &["cat", "score", "boss"]);
//! assert_eq!(words, ["score", "cat"]);
//! ```

// Tiles, piles and frequency tables
pub mod core;

// Round rules and scoring
pub mod game;

// Word matching
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
