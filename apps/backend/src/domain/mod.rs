//! Domain layer: pure game logic types and helpers.

pub mod clock;
pub mod grid;
pub mod letters;
pub mod rules;
pub mod snapshot;
pub mod state;
pub mod tiles;
pub mod words;

#[cfg(test)]
mod tests_props;

// Re-exports for ergonomics
pub use grid::Grid;
pub use letters::{derive_board_seed, derive_refill_seed, TileBag};
pub use rules::{letter_value, GRID_SIZE, MATCH_DURATION_MS};
pub use snapshot::SessionSnapshot;
pub use state::{GameSession, GameStatus, Owner, PlayedMove};
pub use tiles::{Tile, TilePos};
pub use words::{collapse_word, path_is_traceable, trace_word};
