#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Server-authoritative session engine for a timed letter-grid word game.
//!
//! Players trace contiguous paths across an 8×8 board of weighted letter
//! tiles; the engine validates each traced word, scores it, collapses and
//! refills the board from a seeded deterministic letter stream, and keeps
//! pause-aware time per session. A background sweep decays the clocks of
//! all running sessions. Transport, rendering, dictionary loading and
//! durable storage are the host's concern and plug in at the seams
//! ([`dict::WordOracle`], [`infra::clock::GameClock`],
//! [`registry::SessionRegistry`]).

pub mod config;
pub mod dict;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod registry;
pub mod services;
pub mod telemetry;
pub mod test_support;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::EngineConfig;
pub use dict::{WordOracle, WordSet};
pub use domain::snapshot::SessionSnapshot;
pub use domain::state::{GameSession, GameStatus, Owner, PlayedMove};
pub use domain::tiles::{Tile, TilePos};
pub use errors::GameError;
pub use infra::clock::{GameClock, ManualClock, SystemClock};
pub use registry::SessionRegistry;
pub use services::sessions::{PlayResult, SessionService};
pub use services::sweep::TimeSweeper;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
