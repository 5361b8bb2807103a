//! Harness helpers shared by unit and integration tests.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::dict::{WordOracle, WordSet};
use crate::infra::clock::ManualClock;
use crate::registry::SessionRegistry;
use crate::services::sessions::SessionService;

/// Oracle that accepts every candidate word, so gameplay flows can be
/// exercised against a randomly lettered board.
pub struct AcceptAll;

impl WordOracle for AcceptAll {
    fn contains(&self, _word: &str) -> bool {
        true
    }
}

/// A small fixed dictionary for rejection-path tests.
pub fn fixture_words() -> WordSet {
    WordSet::new(["cat", "tree", "it", "at", "on"])
}

/// A fully wired engine on a hand-driven clock.
pub struct TestEngine {
    pub service: SessionService,
    pub registry: Arc<SessionRegistry>,
    pub clock: Arc<ManualClock>,
}

pub fn engine(oracle: Arc<dyn WordOracle>, config: EngineConfig) -> TestEngine {
    let registry = Arc::new(SessionRegistry::new());
    let clock = Arc::new(ManualClock::new());
    let service = SessionService::new(registry.clone(), oracle, clock.clone(), config);
    TestEngine {
        service,
        registry,
        clock,
    }
}

/// Engine that accepts every word, with the standard match settings.
pub fn accepting_engine() -> TestEngine {
    engine(Arc::new(AcceptAll), EngineConfig::default())
}
