//! Property-based tests for the letter stream, the grid, and scoring.

use proptest::prelude::*;

use crate::domain::grid::Grid;
use crate::domain::letters::TileBag;
use crate::domain::rules::GRID_SIZE;
use crate::domain::tiles::{Tile, TilePos};
use crate::domain::words::collapse_word;

fn letters(seed: u64, skip: u64, n: usize) -> Vec<char> {
    let mut bag = TileBag::seeded(seed, skip);
    (0..n).map(|_| bag.next_letter()).collect()
}

proptest! {
    /// Skipping K draws lands on the same stream as discarding K letters
    /// from the unskipped stream — on any machine, for any seed.
    #[test]
    fn prop_skip_equals_discard(seed in any::<u64>(), k in 0u64..200, n in 1usize..100) {
        let full = letters(seed, 0, k as usize + n);
        let skipped = letters(seed, k, n);
        prop_assert_eq!(&full[k as usize..], &skipped[..]);
    }

    /// The stream is a pure function of the seed.
    #[test]
    fn prop_stream_is_reproducible(seed in any::<u64>(), n in 1usize..200) {
        prop_assert_eq!(letters(seed, 0, n), letters(seed, 0, n));
    }

    /// Removing any set of distinct board positions and collapsing restores
    /// full columns with contiguous rows, drawing exactly one replacement
    /// per removed tile.
    #[test]
    fn prop_collapse_restores_the_board(
        seed in any::<u64>(),
        picks in proptest::collection::hash_set((0u8..8, 0u16..8), 1..20),
    ) {
        let mut bag = TileBag::seeded(seed, 0);
        let mut grid = Grid::empty();
        let mut history = Grid::empty();
        grid.fill(&mut bag, Some(&mut history));

        let path: Vec<TilePos> = picks.iter().map(|&(x, y)| TilePos::new(x, y)).collect();
        let tiles = grid.tiles_at(&path).unwrap();
        let drawn = grid
            .remove_and_collapse(&tiles, &mut bag, Some(&mut history))
            .unwrap();

        prop_assert_eq!(drawn, tiles.len());
        for (x, column) in grid.columns().iter().enumerate() {
            prop_assert_eq!(column.len(), GRID_SIZE);
            for (y, tile) in column.iter().enumerate() {
                prop_assert_eq!(usize::from(tile.pos.x), x);
                prop_assert_eq!(usize::from(tile.pos.y), y);
            }
        }
        // history holds the whole board plus every replacement
        let history_tiles: usize = history.columns().iter().map(Vec::len).sum();
        prop_assert_eq!(history_tiles, GRID_SIZE * GRID_SIZE + drawn);
    }

    /// Adjacency is symmetric and means exactly one orthogonal step.
    #[test]
    fn prop_adjacency_is_unit_manhattan(a in (0u8..8, 0u16..8), b in (0u8..8, 0u16..8)) {
        let pa = TilePos::new(a.0, a.1);
        let pb = TilePos::new(b.0, b.1);
        let manhattan =
            (i16::from(a.0) - i16::from(b.0)).unsigned_abs() as u32
            + (i32::from(a.1) - i32::from(b.1)).unsigned_abs();
        prop_assert_eq!(pa.is_adjacent(pb), manhattan == 1);
        prop_assert_eq!(pa.is_adjacent(pb), pb.is_adjacent(pa));
    }

    /// A word's score is always its base times its length.
    #[test]
    fn prop_score_is_base_times_length(word in "[A-Z]{1,12}") {
        let tiles: Vec<Tile> = word
            .chars()
            .map(|c| Tile::new(c, TilePos::new(0, 0), TilePos::new(0, 8)))
            .collect();
        let (collapsed, base, score) = collapse_word(&tiles);
        prop_assert_eq!(collapsed.len(), word.len());
        prop_assert_eq!(score, base * word.len() as u32);
    }
}
