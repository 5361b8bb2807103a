//! Error handling for the session engine.

pub mod game;

pub use game::GameError;
