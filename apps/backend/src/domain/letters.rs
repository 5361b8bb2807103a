//! Deterministic weighted letter stream.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::LETTER_POOL;
use crate::domain::tiles::{Tile, TilePos};

/// Seeded source of letters for the board.
///
/// Every machine seeding with the same `(seed, skip)` draws the identical
/// sequence of letters; that is what lets the server independently re-derive
/// the tiles a client will see next, without trusting client-supplied
/// letters. This is the only in-game randomness in the engine.
pub struct TileBag {
    rng: ChaCha8Rng,
}

impl TileBag {
    /// Reset to the deterministic stream keyed by `seed`, then discard
    /// `skip` draws. A second machine that knows how many tiles have already
    /// been consumed can reconstruct the exact remaining stream.
    pub fn seeded(seed: u64, skip: u64) -> Self {
        let mut bag = Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        for _ in 0..skip {
            bag.next_letter();
        }
        bag
    }

    /// Draw one letter from the weighted pool.
    pub fn next_letter(&mut self) -> char {
        let pool = LETTER_POOL.as_bytes();
        pool[self.next_index(pool.len())] as char
    }

    /// Draw a tile destined for `pos`, falling in from `init_pos`.
    pub fn next_tile(&mut self, pos: TilePos, init_pos: TilePos) -> Tile {
        Tile::new(self.next_letter(), pos, init_pos)
    }

    // Uniform index without modulo bias: values at or past the largest
    // multiple of `max` are discarded and redrawn.
    fn next_index(&mut self, max: usize) -> usize {
        let m = max as u64;
        let limit = u64::MAX - (u64::MAX % m);
        loop {
            let x = self.rng.next_u64();
            if x < limit {
                return (x % m) as usize;
            }
        }
    }
}

/// Sub-seed feeding the initial board fill.
pub fn derive_board_seed(seed: u64) -> u64 {
    seed.wrapping_add(1)
}

/// Sub-seed feeding the refill stream, skipped by the tiles-played count.
/// Distinct from the board seed so replacement tiles never replay the
/// board's own prefix.
pub fn derive_refill_seed(seed: u64) -> u64 {
    seed.wrapping_add(2)
}
