//! Core tile engine
//!
//! Draw piles built from frequency tables, and the tile set that decides which
//! words fit the letters in play. Everything here is synchronous and owns its
//! own data; nothing is shared between a pile and a tile set.

mod category;
mod counts;
mod draw_pile;
mod error;
mod frequency;
mod tile_set;

pub use category::Category;
pub use counts::{ALPHABET_LENGTH, LetterCounts};
pub use draw_pile::DrawPile;
pub use error::TileError;
pub use frequency::{FrequencyTable, LetterTables};
pub use tile_set::{TileSet, parse_letter};
