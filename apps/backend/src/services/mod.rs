//! Service layer: session operations and the background sweep.

pub mod sessions;
pub mod sweep;

pub use sessions::{PlayResult, SessionService};
pub use sweep::TimeSweeper;
