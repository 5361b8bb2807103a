//! Keyed in-process session store.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::state::{GameSession, Owner};

/// A session record behind its own lock.
pub type SharedSession = Arc<Mutex<GameSession>>;

/// All live sessions, keyed by id, with an owner index for lookup.
///
/// Each record carries its own mutex: two operations on the same session are
/// serialized, operations on different sessions never contend. The registry
/// itself is lock-free for lookups.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<Uuid, SharedSession>,
    by_owner: DashMap<Owner, Uuid>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new session and index it by owner. Returns the shared handle.
    pub fn insert(&self, session: GameSession) -> SharedSession {
        let id = session.id;
        let owner = session.owner.clone();
        let shared = Arc::new(Mutex::new(session));
        self.sessions.insert(id, shared.clone());
        self.by_owner.insert(owner, id);
        shared
    }

    pub fn get(&self, id: Uuid) -> Option<SharedSession> {
        self.sessions.get(&id).map(|entry| entry.value().clone())
    }

    pub fn find_by_owner(&self, owner: &Owner) -> Option<(Uuid, SharedSession)> {
        let id = *self.by_owner.get(owner)?;
        Some((id, self.get(id)?))
    }

    /// Re-key a session to a new owner (an anonymous player reconnecting).
    /// The caller is responsible for updating the record's own `owner`.
    pub fn rebind_owner(&self, id: Uuid, old: &Owner, new: Owner) {
        self.by_owner.remove(old);
        self.by_owner.insert(new, id);
    }

    /// Drop a session record and its owner index entry.
    pub fn remove(&self, id: Uuid) -> Option<SharedSession> {
        let (_, shared) = self.sessions.remove(&id)?;
        self.by_owner.retain(|_, v| *v != id);
        Some(shared)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Snapshot of the live handles, for the sweep.
    pub fn all(&self) -> Vec<SharedSession> {
        self.sessions
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::GameStatus;

    fn session(owner: &Owner) -> GameSession {
        GameSession::create(owner.clone(), 1, 1000, 0)
    }

    #[tokio::test]
    async fn insert_get_and_owner_lookup() {
        let registry = SessionRegistry::new();
        let owner = Owner::user("u-1").unwrap();
        let id = registry.insert(session(&owner)).lock().await.id;

        assert!(registry.get(id).is_some());
        let (found, shared) = registry.find_by_owner(&owner).unwrap();
        assert_eq!(found, id);
        assert_eq!(shared.lock().await.status, GameStatus::Init);
    }

    #[tokio::test]
    async fn remove_clears_both_indexes() {
        let registry = SessionRegistry::new();
        let owner = Owner::user("u-2").unwrap();
        let id = registry.insert(session(&owner)).lock().await.id;

        assert!(registry.remove(id).is_some());
        assert!(registry.get(id).is_none());
        assert!(registry.find_by_owner(&owner).is_none());
        assert!(registry.remove(id).is_none());
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn rebind_moves_the_owner_index() {
        let registry = SessionRegistry::new();
        let old = Owner::connection(Uuid::new_v4());
        let new = Owner::connection(Uuid::new_v4());
        let id = registry.insert(session(&old)).lock().await.id;

        registry.rebind_owner(id, &old, new.clone());
        assert!(registry.find_by_owner(&old).is_none());
        assert_eq!(registry.find_by_owner(&new).unwrap().0, id);
    }

    #[tokio::test]
    async fn sessions_lock_independently() {
        let registry = SessionRegistry::new();
        let a = registry.insert(session(&Owner::user("a").unwrap()));
        let b = registry.insert(session(&Owner::user("b").unwrap()));

        let guard_a = a.lock().await;
        // holding a's lock must not block b's
        let guard_b = b.try_lock().expect("other sessions must stay lockable");
        assert_ne!(guard_a.id, guard_b.id);
    }
}
