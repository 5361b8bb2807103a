//! Viewer-visible projection of a session.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::grid::Grid;
use crate::domain::state::{GameSession, GameStatus, PlayedMove};

/// What a viewer may observe of a session. The tile history, the clock
/// anchor and the owner identity stay server-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub status: GameStatus,
    pub tiles: Grid,
    pub words: Vec<PlayedMove>,
    pub time_left: u64,
    pub seed: u64,
    pub tiles_played: u64,
    pub score: u32,
}

impl SessionSnapshot {
    pub fn of(session: &GameSession) -> Self {
        Self {
            id: session.id,
            status: session.status,
            tiles: session.tiles.clone(),
            words: session.words.clone(),
            time_left: session.time_left,
            seed: session.seed,
            tiles_played: session.tiles_played,
            score: session.total_score(),
        }
    }
}
