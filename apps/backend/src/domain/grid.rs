//! The 8-column tile grid.

use serde::{Deserialize, Serialize};

use crate::domain::letters::TileBag;
use crate::domain::rules::GRID_SIZE;
use crate::domain::tiles::{Tile, TilePos};

/// Column-major tile stacks; `columns()[x][y]` is the tile at `(x, y)`.
///
/// Outside of a mutation every column holds at least `GRID_SIZE` tiles and
/// row numbers within a column are a contiguous 0-based run. Columns can
/// exceed `GRID_SIZE` after a replay restores the full tile history; `fill`
/// only tops up columns that have dropped below the board height.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    columns: Vec<Vec<Tile>>,
}

impl Grid {
    pub fn empty() -> Self {
        Self {
            columns: vec![Vec::new(); GRID_SIZE],
        }
    }

    pub fn columns(&self) -> &[Vec<Tile>] {
        &self.columns
    }

    pub fn tile_at(&self, pos: TilePos) -> Option<&Tile> {
        self.columns
            .get(usize::from(pos.x))?
            .get(usize::from(pos.y))
    }

    /// Resolve a path of coordinates to the tiles currently at them.
    /// `None` if any coordinate is out of bounds for its column.
    pub fn tiles_at(&self, path: &[TilePos]) -> Option<Vec<Tile>> {
        path.iter().map(|&p| self.tile_at(p).copied()).collect()
    }

    /// Top up every short column to `GRID_SIZE`, drawing from `bag`.
    ///
    /// New tiles fall in from above the board: their `init_pos.y` continues
    /// upward from `GRID_SIZE`, per column. When `history` is given, every
    /// drawn tile is also appended to the matching history column at that
    /// column's own height — the history only ever grows.
    ///
    /// Returns the number of tiles drawn.
    pub fn fill(&mut self, bag: &mut TileBag, mut history: Option<&mut Grid>) -> usize {
        let mut drawn = 0;
        for x in 0..self.columns.len() {
            let mut spawn_row = GRID_SIZE as u16;
            while self.columns[x].len() < GRID_SIZE {
                let y = self.columns[x].len() as u16;
                let tile = bag.next_tile(
                    TilePos::new(x as u8, y),
                    TilePos::new(x as u8, spawn_row),
                );
                spawn_row += 1;
                drawn += 1;
                if let Some(history) = history.as_deref_mut() {
                    history.append_mirror(x, &tile);
                }
                self.columns[x].push(tile);
            }
        }
        drawn
    }

    // History copy of a freshly drawn tile, positioned at the history
    // column's own height rather than the live column's.
    fn append_mirror(&mut self, x: usize, tile: &Tile) {
        let height = self.columns[x].len() as u16;
        self.columns[x].push(Tile::new(
            tile.letter,
            TilePos::new(x as u8, height),
            TilePos::new(x as u8, height + GRID_SIZE as u16),
        ));
    }

    /// Close the gaps left by removed tiles. Every tile keeps its column
    /// order, captures its pre-shift row in `init_pos.y`, and takes its new
    /// 0-based row.
    pub fn shift(&mut self) {
        for column in &mut self.columns {
            for (y, tile) in column.iter_mut().enumerate() {
                tile.init_pos.y = tile.pos.y;
                tile.pos.y = y as u16;
            }
        }
    }

    /// Remove `tiles` from their columns, then shift and refill.
    ///
    /// This is the only mutation a successful word triggers. All the tiles
    /// must currently be on the board; otherwise the grid is left untouched
    /// and `None` is returned. On success, returns the number of replacement
    /// tiles drawn.
    pub fn remove_and_collapse(
        &mut self,
        tiles: &[Tile],
        bag: &mut TileBag,
        history: Option<&mut Grid>,
    ) -> Option<usize> {
        for tile in tiles {
            let column = self.columns.get(usize::from(tile.pos.x))?;
            if !column.iter().any(|t| t == tile) {
                return None;
            }
        }
        for tile in tiles {
            let column = &mut self.columns[usize::from(tile.pos.x)];
            if let Some(i) = column.iter().position(|t| t == tile) {
                column.remove(i);
            }
        }
        self.shift();
        Some(self.fill(bag, history))
    }
}
