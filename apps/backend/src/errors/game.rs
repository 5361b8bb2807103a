//! Game-facing error taxonomy.
//!
//! Codes are the stable strings surfaced verbatim to callers; add new codes
//! here, never pass ad-hoc strings. A word that merely fails to validate is
//! not an error — see `PlayResult::Rejected`.

use thiserror::Error;

/// Errors an operation can surface to its caller. All of them abort the
/// triggering operation without corrupting stored session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Unknown session id, or a session the caller does not own.
    #[error("no such game session")]
    InvalidGame,
    /// The operation needs a session that has been started.
    #[error("game has not been started")]
    GameNotStarted,
    /// The clock had already run out when the operation arrived.
    #[error("game time has expired")]
    TimeExpired,
    /// No principal or connection context to key a session by.
    #[error("no authorized principal")]
    NotAuthorized,
}

impl GameError {
    /// Stable wire code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::InvalidGame => "invalid-game",
            GameError::GameNotStarted => "game-not-started",
            GameError::TimeExpired => "time-expired",
            GameError::NotAuthorized => "not-authorized",
        }
    }
}
