//! CreateSessionHandler - Command handler for starting a worksheet session.

use std::sync::Arc;

use crate::application::handlers::selection::{state, SelectionView};
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::selection::Selection;
use crate::ports::{StateStore, StateStoreError};

/// Result of successful session creation.
#[derive(Debug, Clone)]
pub struct CreateSessionResult {
    pub session_id: SessionId,
    pub created_at: Timestamp,
    pub view: SelectionView,
}

/// Handler for creating sessions.
///
/// A session starts on the hard-coded default triple; no component other
/// than the resolver writes the selection keys afterwards.
pub struct CreateSessionHandler {
    store: Arc<dyn StateStore>,
}

impl CreateSessionHandler {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<CreateSessionResult, StateStoreError> {
        let session_id = SessionId::new();
        self.store.create_session(session_id).await?;

        let selection = Selection::session_default();
        state::write_selection(self.store.as_ref(), &session_id, &selection).await?;

        tracing::info!(session_id = %session_id, "worksheet session created");

        Ok(CreateSessionResult {
            session_id,
            created_at: Timestamp::now(),
            view: SelectionView::from_selection(selection),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStateStore;

    #[tokio::test]
    async fn creates_a_session_on_the_default_triple() {
        let store = Arc::new(InMemoryStateStore::new());
        let result = CreateSessionHandler::new(store.clone())
            .handle()
            .await
            .unwrap();

        assert!(store.exists(&result.session_id).await.unwrap());
        assert_eq!(result.view.selection, Selection::session_default());
        assert_eq!(
            store
                .get(&result.session_id, state::KEY_SERVICE)
                .await
                .unwrap()
                .as_deref(),
            Some("オンライン自習室")
        );
    }

    #[tokio::test]
    async fn each_session_gets_its_own_id() {
        let store = Arc::new(InMemoryStateStore::new());
        let handler = CreateSessionHandler::new(store.clone());
        let a = handler.handle().await.unwrap();
        let b = handler.handle().await.unwrap();
        assert_ne!(a.session_id, b.session_id);
        assert_eq!(store.session_count().await, 2);
    }
}
