//! EndSessionHandler - Command handler discarding a worksheet session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::ports::{StateStore, StateStoreError};

/// Handler for ending sessions. All session state is discarded; there is
/// nothing to archive in this system.
pub struct EndSessionHandler {
    store: Arc<dyn StateStore>,
}

impl EndSessionHandler {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, session_id: SessionId) -> Result<(), StateStoreError> {
        self.store.remove_session(&session_id).await?;
        tracing::info!(session_id = %session_id, "worksheet session ended");
        Ok(())
    }
}
