//! Background time decay for running sessions.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::domain::clock as session_clock;
use crate::domain::state::GameStatus;
use crate::infra::clock::GameClock;
use crate::registry::SessionRegistry;

/// Periodic decay of remaining time across all running sessions.
///
/// One sweeper per registry. Each pass takes each session's own lock
/// briefly, so a pass can never interleave with a foreground operation on
/// the same session. Paused and unstarted sessions are left alone; a
/// session whose time runs out is moved to `Ended` right there.
pub struct TimeSweeper {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl TimeSweeper {
    /// Spawn the sweep task on the current tokio runtime.
    pub fn spawn(
        registry: Arc<SessionRegistry>,
        clock: Arc<dyn GameClock>,
        interval: Duration,
    ) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let handle = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + interval;
            let mut ticker = tokio::time::interval_at(start, interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            info!(interval_ms = interval.as_millis() as u64, "time sweep started");
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => sweep_once(&registry, clock.as_ref()).await,
                }
            }
            info!("time sweep stopped");
        });
        Self { cancel, handle }
    }

    /// Stop the task and wait for it to wind down.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        let _ = self.handle.await;
    }
}

/// One decay pass over every session in the registry.
pub async fn sweep_once(registry: &SessionRegistry, clock: &dyn GameClock) {
    for shared in registry.all() {
        let mut session = shared.lock().await;
        if session.status != GameStatus::Running {
            continue;
        }
        session_clock::settle(&mut session, clock.now_ms());
        if session.status == GameStatus::Ended {
            debug!(session_id = %session.id, "session clock ran out");
        }
    }
}
