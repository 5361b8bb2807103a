//! Pause-aware time accounting for a session.
//!
//! There is exactly one accounting path: the background sweep decays running
//! sessions once per period, and every mutating operation charges elapsed
//! time before acting. `previous_tick` is the single anchor; a paused
//! session is never charged, so pausing twice cannot double-decrement.

use crate::domain::state::{GameSession, GameStatus};

/// Charge the time elapsed since the last tick against the session.
///
/// Non-running sessions only move their anchor. A running session whose
/// charge empties the clock transitions to `Ended` with `time_left` pinned
/// at 0 — the remaining time a viewer reads is never negative.
///
/// Returns `true` when the deadline had already passed, which fails the
/// calling operation with `time-expired` before it touches the board.
pub fn settle(session: &mut GameSession, now_ms: u64) -> bool {
    let elapsed = now_ms.saturating_sub(session.previous_tick);
    session.previous_tick = now_ms;
    if session.status != GameStatus::Running {
        return false;
    }
    let expired = elapsed >= session.time_left;
    session.time_left = session.time_left.saturating_sub(elapsed);
    if expired {
        session.status = GameStatus::Ended;
    }
    expired
}

/// Stop the clock. The elapsed running time is charged first; an already
/// paused session is left exactly as it is.
///
/// Returns `true` when the charge found the deadline already passed (the
/// session is then `Ended`, not `Paused`).
pub fn pause(session: &mut GameSession, now_ms: u64) -> bool {
    let expired = settle(session, now_ms);
    if !expired && session.status != GameStatus::Ended {
        session.status = GameStatus::Paused;
    }
    expired
}

/// Restart the clock. The paused interval consumed no game time, so only
/// the anchor moves.
pub fn resume(session: &mut GameSession, now_ms: u64) {
    session.status = GameStatus::Running;
    session.previous_tick = now_ms;
}
