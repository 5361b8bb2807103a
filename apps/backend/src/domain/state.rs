//! The session aggregate and its owner identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::grid::Grid;
use crate::domain::letters::{derive_board_seed, TileBag};
use crate::domain::tiles::Tile;
use crate::errors::GameError;

/// Lifecycle of a session. `Ended` is terminal until a replay resets the
/// session in place, or the owner deletes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Init,
    Running,
    Paused,
    Ended,
}

/// The principal a session is keyed by: a signed-in user, or the transport
/// connection for anonymous play.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Owner {
    User(String),
    Connection(Uuid),
}

impl Owner {
    /// Owner for a signed-in user. An empty user id means the caller had no
    /// principal context at all.
    pub fn user(id: impl Into<String>) -> Result<Self, GameError> {
        let id = id.into();
        if id.is_empty() {
            return Err(GameError::NotAuthorized);
        }
        Ok(Self::User(id))
    }

    /// Owner for an anonymous player, keyed by its connection.
    pub fn connection(id: Uuid) -> Self {
        Self::Connection(id)
    }

    /// Anonymous sessions may be re-keyed to a new connection (the same
    /// player reconnecting); user sessions never change hands.
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

/// One accepted word: the traced tiles retained verbatim, in path order,
/// plus the collapsed word and its score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayedMove {
    pub tiles: Vec<Tile>,
    pub word: String,
    pub base: u32,
    pub score: u32,
}

/// The aggregate root for one player's game.
///
/// `tile_history` is the append-only mirror of every tile ever drawn; it is
/// what makes an exact replay of the same board possible. `previous_tick`
/// and `tile_history` are server-private — viewers only ever see the
/// projection in [`crate::domain::snapshot::SessionSnapshot`].
#[derive(Clone, Debug)]
pub struct GameSession {
    pub id: Uuid,
    pub owner: Owner,
    pub status: GameStatus,
    pub tiles: Grid,
    pub tile_history: Grid,
    pub words: Vec<PlayedMove>,
    /// Remaining game time in milliseconds. Never negative.
    pub time_left: u64,
    /// Last clock instant (ms) the remaining time was charged.
    pub previous_tick: u64,
    /// Base seed of this session's letter streams.
    pub seed: u64,
    /// Tiles drawn from the refill stream to replace played tiles — the
    /// skip offset that lets any machine resynchronize the stream.
    pub tiles_played: u64,
}

impl GameSession {
    /// A fresh session: seeded board, history mirroring the board, full
    /// match time, not yet started.
    pub fn create(owner: Owner, seed: u64, match_duration_ms: u64, now_ms: u64) -> Self {
        let mut bag = TileBag::seeded(derive_board_seed(seed), 0);
        let mut tiles = Grid::empty();
        let mut history = Grid::empty();
        tiles.fill(&mut bag, Some(&mut history));
        Self {
            id: Uuid::new_v4(),
            owner,
            status: GameStatus::Init,
            tiles,
            tile_history: history,
            words: Vec::new(),
            time_left: match_duration_ms,
            previous_tick: now_ms,
            seed,
            tiles_played: 0,
        }
    }

    /// Total score across all accepted words.
    pub fn total_score(&self) -> u32 {
        self.words.iter().map(|w| w.score).sum()
    }
}
