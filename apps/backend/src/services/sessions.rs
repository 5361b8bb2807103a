//! Session lifecycle operations.
//!
//! Every operation loads the session from the registry, takes its per-record
//! lock, validates status and clock, mutates, and returns — all-or-nothing.
//! The server never trusts client-supplied letters: replacement tiles are
//! re-derived from `(seed, tiles_played)` on every accepted word.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::dict::WordOracle;
use crate::domain::clock as session_clock;
use crate::domain::letters::{derive_refill_seed, TileBag};
use crate::domain::snapshot::SessionSnapshot;
use crate::domain::state::{GameSession, GameStatus, Owner};
use crate::domain::tiles::TilePos;
use crate::domain::words;
use crate::errors::GameError;
use crate::infra::clock::GameClock;
use crate::registry::{SessionRegistry, SharedSession};

/// Outcome of a word submission. A rejected word is routine gameplay, not
/// an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayResult {
    Accepted { word: String, base: u32, score: u32 },
    Rejected,
}

impl PlayResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, PlayResult::Accepted { .. })
    }
}

/// The operation surface of the engine. One instance serves every session
/// in its registry.
pub struct SessionService {
    registry: Arc<SessionRegistry>,
    oracle: Arc<dyn WordOracle>,
    clock: Arc<dyn GameClock>,
    config: EngineConfig,
}

impl SessionService {
    pub fn new(
        registry: Arc<SessionRegistry>,
        oracle: Arc<dyn WordOracle>,
        clock: Arc<dyn GameClock>,
        config: EngineConfig,
    ) -> Self {
        Self {
            registry,
            oracle,
            clock,
            config,
        }
    }

    pub fn registry(&self) -> Arc<SessionRegistry> {
        self.registry.clone()
    }

    /// Resolve or create the caller's session and return its id.
    ///
    /// An existing session is found through the owner index, or through
    /// `existing_id` for anonymous players whose connection identity has
    /// changed since the session was created (the id then acts as the
    /// reclaim token and the session is re-keyed to the new connection).
    /// A found session that is running is paused. With nothing to resume,
    /// a new session is created with a fresh random seed and a freshly
    /// filled board.
    pub async fn init(&self, owner: &Owner, existing_id: Option<Uuid>) -> Result<Uuid, GameError> {
        if let Some((id, shared)) = self.resolve(owner, existing_id).await {
            let mut session = shared.lock().await;
            if session.owner != *owner {
                // anonymous reclaim: hand the session to the new connection
                self.registry
                    .rebind_owner(id, &session.owner, owner.clone());
                session.owner = owner.clone();
            }
            if session.status == GameStatus::Running {
                session_clock::pause(&mut session, self.clock.now_ms());
                debug!(session_id = %id, "paused running session on init");
            }
            return Ok(id);
        }

        let seed = rand::random::<u64>();
        let session = GameSession::create(
            owner.clone(),
            seed,
            self.config.match_duration_ms,
            self.clock.now_ms(),
        );
        let id = session.id;
        self.registry.insert(session);
        info!(session_id = %id, "created game session");
        Ok(id)
    }

    /// Start (or restart) the clock on a session.
    pub async fn start(&self, owner: &Owner, id: Uuid) -> Result<(), GameError> {
        let shared = self.registry.get(id).ok_or(GameError::InvalidGame)?;
        let mut session = shared.lock().await;
        require_owner(&session, owner)?;
        if session.status == GameStatus::Ended {
            return Err(GameError::GameNotStarted);
        }
        let now = self.clock.now_ms();
        if session_clock::settle(&mut session, now) {
            return Err(GameError::TimeExpired);
        }
        session_clock::resume(&mut session, now);
        info!(session_id = %id, time_left = session.time_left, "session running");
        Ok(())
    }

    /// Toggle pause on a started session.
    pub async fn set_paused(&self, owner: &Owner, id: Uuid, paused: bool) -> Result<(), GameError> {
        let shared = self.registry.get(id).ok_or(GameError::InvalidGame)?;
        let mut session = shared.lock().await;
        require_owner(&session, owner)?;
        require_started(&session)?;

        let now = self.clock.now_ms();
        let expired = if paused {
            session_clock::pause(&mut session, now)
        } else {
            let expired = session_clock::settle(&mut session, now);
            if !expired {
                session_clock::resume(&mut session, now);
            }
            expired
        };
        if expired {
            return Err(GameError::TimeExpired);
        }
        debug!(session_id = %id, paused, time_left = session.time_left, "pause toggled");
        Ok(())
    }

    /// Validate and apply one traced word.
    ///
    /// The clock is charged before anything else; a word that arrives after
    /// the deadline fails with `time-expired` and leaves board and word list
    /// untouched. An unplayable path or unknown word is a plain `Rejected`.
    pub async fn play_word(
        &self,
        owner: &Owner,
        id: Uuid,
        path: &[TilePos],
    ) -> Result<PlayResult, GameError> {
        let shared = self.registry.get(id).ok_or(GameError::InvalidGame)?;
        let mut session = shared.lock().await;
        require_owner(&session, owner)?;
        require_started(&session)?;

        if session_clock::settle(&mut session, self.clock.now_ms()) {
            debug!(session_id = %id, "word arrived after the deadline");
            return Err(GameError::TimeExpired);
        }

        let session = &mut *session;
        let Some(played) = words::trace_word(&session.tiles, path, self.oracle.as_ref()) else {
            debug!(session_id = %id, "word rejected");
            return Ok(PlayResult::Rejected);
        };

        let mut bag = TileBag::seeded(derive_refill_seed(session.seed), session.tiles_played);
        let Some(drawn) =
            session
                .tiles
                .remove_and_collapse(&played.tiles, &mut bag, Some(&mut session.tile_history))
        else {
            return Ok(PlayResult::Rejected);
        };
        session.tiles_played += drawn as u64;

        info!(
            session_id = %id,
            word = %played.word,
            score = played.score,
            tiles_played = session.tiles_played,
            "word accepted"
        );
        let result = PlayResult::Accepted {
            word: played.word.clone(),
            base: played.base,
            score: played.score,
        };
        session.words.push(played);
        Ok(result)
    }

    /// Reset the session to replay the identical board.
    ///
    /// The live grid becomes the full tile history — the board plus every
    /// replacement tile ever drawn — so the rerun sees the same tiles fall
    /// in the same order without touching the letter stream again.
    pub async fn replay(&self, owner: &Owner, id: Uuid) -> Result<(), GameError> {
        let shared = self.registry.get(id).ok_or(GameError::InvalidGame)?;
        let mut session = shared.lock().await;
        require_owner(&session, owner)?;

        session.tiles = session.tile_history.clone();
        session.words.clear();
        session.time_left = self.config.match_duration_ms;
        session.status = GameStatus::Init;
        session.previous_tick = self.clock.now_ms();
        info!(session_id = %id, "session reset for replay");
        Ok(())
    }

    /// Delete the session record. Deleting a session that is already gone
    /// succeeds quietly.
    pub async fn end(&self, owner: &Owner, id: Uuid) -> Result<(), GameError> {
        let Some(shared) = self.registry.get(id) else {
            return Ok(());
        };
        {
            let session = shared.lock().await;
            require_owner(&session, owner)?;
        }
        self.registry.remove(id);
        info!(session_id = %id, "session ended and removed");
        Ok(())
    }

    /// Current viewer-visible state. Settles the clock first so the
    /// remaining time is accurate between sweep ticks.
    pub async fn snapshot(&self, owner: &Owner, id: Uuid) -> Result<SessionSnapshot, GameError> {
        let shared = self.registry.get(id).ok_or(GameError::InvalidGame)?;
        let mut session = shared.lock().await;
        require_owner(&session, owner)?;
        session_clock::settle(&mut session, self.clock.now_ms());
        Ok(SessionSnapshot::of(&session))
    }

    /// Safety net for vanished clients: transport teardown calls this so a
    /// running session is not silently drained while nobody is playing.
    pub async fn on_connection_lost(&self, owner: &Owner) {
        let Some((id, shared)) = self.registry.find_by_owner(owner) else {
            return;
        };
        let mut session = shared.lock().await;
        if session.status == GameStatus::Running {
            session_clock::pause(&mut session, self.clock.now_ms());
            info!(session_id = %id, "paused session after connection loss");
        }
    }

    // Owner index first; `existing_id` second, only for anonymous reclaim
    // or the caller's own session.
    async fn resolve(
        &self,
        owner: &Owner,
        existing_id: Option<Uuid>,
    ) -> Option<(Uuid, SharedSession)> {
        if let Some(found) = self.registry.find_by_owner(owner) {
            return Some(found);
        }
        let id = existing_id?;
        let shared = self.registry.get(id)?;
        {
            let session = shared.lock().await;
            let reclaimable =
                session.owner == *owner || (session.owner.is_anonymous() && owner.is_anonymous());
            if !reclaimable {
                return None;
            }
        }
        Some((id, shared))
    }
}

fn require_owner(session: &GameSession, owner: &Owner) -> Result<(), GameError> {
    if session.owner != *owner {
        return Err(GameError::InvalidGame);
    }
    Ok(())
}

fn require_started(session: &GameSession) -> Result<(), GameError> {
    match session.status {
        GameStatus::Running | GameStatus::Paused => Ok(()),
        GameStatus::Init | GameStatus::Ended => Err(GameError::GameNotStarted),
    }
}
