//! Engine configuration from the environment.

use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::domain::rules::{MATCH_DURATION_MS, SWEEP_INTERVAL_MS};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid configuration: {detail}")]
pub struct ConfigError {
    detail: String,
}

/// Tunable engine durations.
///
/// Environment variables must be set by the runtime environment;
/// unset variables fall back to the standard match settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Game time per match, in milliseconds.
    pub match_duration_ms: u64,
    /// Period of the background time-decay sweep, in milliseconds.
    pub sweep_interval_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_duration_ms: MATCH_DURATION_MS,
            sweep_interval_ms: SWEEP_INTERVAL_MS,
        }
    }
}

impl EngineConfig {
    /// Read overrides from `GAME_MATCH_DURATION_MS` and
    /// `GAME_SWEEP_INTERVAL_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            match_duration_ms: ms_var("GAME_MATCH_DURATION_MS", MATCH_DURATION_MS)?,
            sweep_interval_ms: ms_var("GAME_SWEEP_INTERVAL_MS", SWEEP_INTERVAL_MS)?,
        })
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_millis(self.sweep_interval_ms)
    }
}

fn ms_var(name: &str, default: u64) -> Result<u64, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<u64>()
            .ok()
            .filter(|ms| *ms > 0)
            .ok_or_else(|| ConfigError {
                detail: format!("{name} must be a positive number of milliseconds, got '{raw}'"),
            }),
        Err(_) => Ok(default),
    }
}
