//! Formatting utilities for terminal output

use crate::core::TileSet;

/// Render tiles as bracketed slots, padding with blanks up to `slots`
///
/// Tiles beyond `slots` are still shown.
#[must_use]
pub fn tile_slots(tiles: &TileSet, slots: usize) -> String {
    let shown = slots.max(tiles.size());
    let mut result = String::with_capacity(shown * 3);

    let mut letters = tiles.iter();
    for _ in 0..shown {
        result.push('[');
        result.push(letters.next().unwrap_or(' '));
        result.push(']');
    }

    result
}

/// Bar of `width` cells with the `count / total` share filled, rounded down
///
/// A `count` above `total` fills the bar; an empty `total` leaves it blank.
#[must_use]
pub fn share_bar(count: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        count.min(total) * width / total
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Plural suffix for `count`
#[must_use]
pub const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_slots_pads_to_width() {
        let tiles = TileSet::from_letters("cat").unwrap();
        assert_eq!(tile_slots(&tiles, 5), "[C][A][T][ ][ ]");
    }

    #[test]
    fn tile_slots_empty() {
        assert_eq!(tile_slots(&TileSet::new(), 3), "[ ][ ][ ]");
    }

    #[test]
    fn tile_slots_overflow_is_shown() {
        let tiles = TileSet::from_letters("abcd").unwrap();
        assert_eq!(tile_slots(&tiles, 2), "[A][B][C][D]");
    }

    #[test]
    fn share_bar_rounds_down() {
        // 37 of 100 rounds on a 40-cell bar is 14.8 cells
        let bar = share_bar(37, 100, 40);
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), 14);
        assert_eq!(bar.chars().count(), 40);
    }

    #[test]
    fn share_bar_every_round() {
        assert_eq!(share_bar(3, 3, 6), "██████");
    }

    #[test]
    fn share_bar_no_rounds() {
        assert_eq!(share_bar(0, 0, 4), "░░░░");
        assert_eq!(share_bar(0, 12, 4), "░░░░");
    }

    #[test]
    fn share_bar_clamps_overflow() {
        assert_eq!(share_bar(9, 4, 4), "████");
    }

    #[test]
    fn plural_suffix() {
        assert_eq!(plural(1), "");
        assert_eq!(plural(0), "s");
        assert_eq!(plural(2), "s");
    }
}
