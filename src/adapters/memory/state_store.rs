//! In-memory state store implementation.
//!
//! Sessions live in a HashMap behind a tokio RwLock. Suitable for a single
//! server process, which is all this system requires: state is specified to
//! survive interactions within a session, not process restarts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{SessionId, Timestamp};
use crate::ports::{StateStore, StateStoreError};

/// State held for one session.
#[derive(Debug, Clone)]
struct SessionEntry {
    created_at: Timestamp,
    values: HashMap<String, String>,
}

/// In-memory state store keyed by session.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionEntry>>>,
}

impl InMemoryStateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions, for observability.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// When a session was created, if it exists.
    pub async fn created_at(&self, session_id: &SessionId) -> Option<Timestamp> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .map(|entry| entry.created_at)
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn create_session(&self, session_id: SessionId) -> Result<(), StateStoreError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session_id) {
            return Err(StateStoreError::SessionExists(session_id));
        }
        sessions.insert(
            session_id,
            SessionEntry {
                created_at: Timestamp::now(),
                values: HashMap::new(),
            },
        );
        Ok(())
    }

    async fn exists(&self, session_id: &SessionId) -> Result<bool, StateStoreError> {
        Ok(self.sessions.read().await.contains_key(session_id))
    }

    async fn get(
        &self,
        session_id: &SessionId,
        key: &str,
    ) -> Result<Option<String>, StateStoreError> {
        let sessions = self.sessions.read().await;
        let entry = sessions
            .get(session_id)
            .ok_or(StateStoreError::SessionNotFound(*session_id))?;
        Ok(entry.values.get(key).cloned())
    }

    async fn set(
        &self,
        session_id: &SessionId,
        key: &str,
        value: String,
    ) -> Result<(), StateStoreError> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions
            .get_mut(session_id)
            .ok_or(StateStoreError::SessionNotFound(*session_id))?;
        entry.values.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove_session(&self, session_id: &SessionId) -> Result<(), StateStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions
            .remove(session_id)
            .ok_or(StateStoreError::SessionNotFound(*session_id))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn values_round_trip_within_a_session() {
        let store = InMemoryStateStore::new();
        let id = SessionId::new();
        store.create_session(id).await.unwrap();

        assert_eq!(store.get(&id, "category").await.unwrap(), None);
        store
            .set(&id, "category", "BtoC".to_string())
            .await
            .unwrap();
        assert_eq!(
            store.get(&id, "category").await.unwrap(),
            Some("BtoC".to_string())
        );
    }

    #[tokio::test]
    async fn set_replaces_the_previous_value() {
        let store = InMemoryStateStore::new();
        let id = SessionId::new();
        store.create_session(id).await.unwrap();

        store.set(&id, "k", "first".to_string()).await.unwrap();
        store.set(&id, "k", "second".to_string()).await.unwrap();
        assert_eq!(store.get(&id, "k").await.unwrap(), Some("second".to_string()));
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = InMemoryStateStore::new();
        let a = SessionId::new();
        let b = SessionId::new();
        store.create_session(a).await.unwrap();
        store.create_session(b).await.unwrap();

        store.set(&a, "k", "value-a".to_string()).await.unwrap();
        assert_eq!(store.get(&b, "k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn creating_twice_fails() {
        let store = InMemoryStateStore::new();
        let id = SessionId::new();
        store.create_session(id).await.unwrap();
        assert_eq!(
            store.create_session(id).await,
            Err(StateStoreError::SessionExists(id))
        );
    }

    #[tokio::test]
    async fn unknown_session_is_an_error() {
        let store = InMemoryStateStore::new();
        let id = SessionId::new();
        assert_eq!(
            store.get(&id, "k").await,
            Err(StateStoreError::SessionNotFound(id))
        );
        assert_eq!(
            store.set(&id, "k", "v".to_string()).await,
            Err(StateStoreError::SessionNotFound(id))
        );
        assert_eq!(
            store.remove_session(&id).await,
            Err(StateStoreError::SessionNotFound(id))
        );
    }

    #[tokio::test]
    async fn remove_discards_all_session_state() {
        let store = InMemoryStateStore::new();
        let id = SessionId::new();
        store.create_session(id).await.unwrap();
        store.set(&id, "k", "v".to_string()).await.unwrap();

        store.remove_session(&id).await.unwrap();
        assert!(!store.exists(&id).await.unwrap());
        assert_eq!(store.session_count().await, 0);
    }
}
