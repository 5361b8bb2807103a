//! Word tracing: path validation, collapse, and scoring.

use crate::dict::WordOracle;
use crate::domain::grid::Grid;
use crate::domain::state::PlayedMove;
use crate::domain::tiles::{Tile, TilePos};

/// True when `path` is non-empty, visits no coordinate twice, and every step
/// is orthogonally adjacent to the previous one.
pub fn path_is_traceable(path: &[TilePos]) -> bool {
    if path.is_empty() {
        return false;
    }
    if path.windows(2).any(|pair| !pair[0].is_adjacent(pair[1])) {
        return false;
    }
    path.iter()
        .enumerate()
        .all(|(i, pos)| !path[..i].contains(pos))
}

/// Concatenate letters and score a traced word: the raw tile values summed,
/// multiplied by the word length. The multiplier makes longer words worth
/// disproportionately more.
pub fn collapse_word(tiles: &[Tile]) -> (String, u32, u32) {
    let word: String = tiles.iter().map(|t| t.letter).collect();
    let base: u32 = tiles.iter().map(|t| u32::from(t.value)).sum();
    let score = base * word.len() as u32;
    (word, base, score)
}

/// Resolve `path` against the board and the dictionary.
///
/// `None` is the normal "not a word" outcome — a disconnected, out-of-bounds
/// or non-dictionary path is routine gameplay, not an error. On success the
/// traced tiles are returned verbatim so the caller can drive the grid
/// collapse with the exact tile identities.
pub fn trace_word(grid: &Grid, path: &[TilePos], oracle: &dyn WordOracle) -> Option<PlayedMove> {
    if !path_is_traceable(path) {
        return None;
    }
    let tiles = grid.tiles_at(path)?;
    let (word, base, score) = collapse_word(&tiles);
    if !oracle.contains(&word) {
        return None;
    }
    Some(PlayedMove {
        tiles,
        word,
        base,
        score,
    })
}
