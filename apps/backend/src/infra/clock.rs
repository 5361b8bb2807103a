//! Monotonic clock capability.
//!
//! All time accounting flows through [`GameClock`], so tests drive a manual
//! clock instead of sleeping and business logic never reads wall time
//! directly.

use std::time::Instant;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

static PROCESS_EPOCH: Lazy<Instant> = Lazy::new(Instant::now);

/// Milliseconds on a monotonic timeline. The origin is arbitrary; only
/// differences carry meaning.
pub trait GameClock: Send + Sync {
    fn now_ms(&self) -> u64;
}

/// Real monotonic time, measured from first use in this process.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl GameClock for SystemClock {
    fn now_ms(&self) -> u64 {
        PROCESS_EPOCH.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Mutex<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: u64) {
        *self.now.lock() += ms;
    }

    pub fn set(&self, ms: u64) {
        *self.now.lock() = ms;
    }
}

impl GameClock for ManualClock {
    fn now_ms(&self) -> u64 {
        *self.now.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_does_not_go_backwards() {
        let clock = SystemClock;
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn manual_clock_moves_only_by_hand() {
        let clock = ManualClock::new();
        assert_eq!(clock.now_ms(), 0);
        clock.advance(250);
        clock.advance(750);
        assert_eq!(clock.now_ms(), 1000);
        clock.set(10);
        assert_eq!(clock.now_ms(), 10);
    }
}
