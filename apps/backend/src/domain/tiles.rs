//! Tile and position types.

use serde::{Deserialize, Serialize};

use crate::domain::rules::letter_value;

/// Column/row coordinates on the board. Row 0 is the bottom of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePos {
    pub x: u8,
    pub y: u16,
}

impl TilePos {
    pub const fn new(x: u8, y: u16) -> Self {
        Self { x, y }
    }

    /// Orthogonal adjacency: exactly one axis differs, by exactly one.
    pub fn is_adjacent(self, other: TilePos) -> bool {
        let dx = (i16::from(self.x) - i16::from(other.x)).unsigned_abs();
        let dy = (i32::from(self.y) - i32::from(other.y)).unsigned_abs();
        (dx == 1 && dy == 0) || (dx == 0 && dy == 1)
    }
}

/// A single lettered tile.
///
/// `pos` is where the tile sits now. `init_pos` is where it visually fell
/// from; gameplay never reads it, but it is preserved and propagated so
/// clients can animate the drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub letter: char,
    pub value: u8,
    pub pos: TilePos,
    pub init_pos: TilePos,
}

impl Tile {
    pub fn new(letter: char, pos: TilePos, init_pos: TilePos) -> Self {
        Self {
            letter,
            value: letter_value(letter),
            pos,
            init_pos,
        }
    }
}
