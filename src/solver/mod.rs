//! Finding every playable word
//!
//! Pure functions over a tile set and a word list; nothing here mutates either.

mod solutions;

pub use solutions::{assemblable, best_length, longest_first, ranked_solutions};
