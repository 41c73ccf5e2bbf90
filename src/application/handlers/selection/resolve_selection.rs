//! ResolveSelectionHandler - Command handler reconciling one interaction.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::SessionId;
use crate::domain::selection::{self, SelectionError, SelectionInput};
use crate::ports::{StateStore, StateStoreError};

use super::state::{load_stored, write_selection, SelectionView};

/// The raw widget values submitted with one interaction.
#[derive(Debug, Clone)]
pub struct ResolveSelectionCommand {
    pub session_id: SessionId,
    pub category: String,
    pub industry: Option<String>,
    pub service: Option<String>,
}

/// Errors surfaced while reconciling a selection for a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionFlowError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Store(#[from] StateStoreError),
}

/// Handler for the per-interaction reconciliation.
pub struct ResolveSelectionHandler {
    store: Arc<dyn StateStore>,
}

impl ResolveSelectionHandler {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Loads previous state, runs the pure resolver, and replaces the
    /// stored triple with the result.
    ///
    /// An invalid category fails before any write, leaving the previous
    /// triple in place.
    pub async fn handle(
        &self,
        cmd: ResolveSelectionCommand,
    ) -> Result<SelectionView, SelectionFlowError> {
        let (_, stored) = load_stored(self.store.as_ref(), &cmd.session_id).await?;

        let input = SelectionInput {
            category: &cmd.category,
            industry: cmd.industry.as_deref(),
            service: cmd.service.as_deref(),
        };
        let resolved = selection::resolve(&input, &stored)?;

        write_selection(self.store.as_ref(), &cmd.session_id, &resolved).await?;

        tracing::debug!(
            session_id = %cmd.session_id,
            summary = %resolved.summary(),
            "selection reconciled"
        );

        Ok(SelectionView::from_selection(resolved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStateStore;
    use crate::application::handlers::session::CreateSessionHandler;
    use crate::domain::taxonomy::Category;

    async fn handler_with_session() -> (ResolveSelectionHandler, SessionId) {
        let store = Arc::new(InMemoryStateStore::new());
        let created = CreateSessionHandler::new(store.clone())
            .handle()
            .await
            .unwrap();
        (ResolveSelectionHandler::new(store), created.session_id)
    }

    fn category_only(session_id: SessionId, category: &str) -> ResolveSelectionCommand {
        ResolveSelectionCommand {
            session_id,
            category: category.to_string(),
            industry: None,
            service: None,
        }
    }

    #[tokio::test]
    async fn unknown_session_is_reported() {
        let store = Arc::new(InMemoryStateStore::new());
        let handler = ResolveSelectionHandler::new(store);
        let ghost = SessionId::new();

        let result = handler.handle(category_only(ghost, "BtoC")).await;
        assert_eq!(
            result,
            Err(SelectionFlowError::Store(StateStoreError::SessionNotFound(
                ghost
            )))
        );
    }

    #[tokio::test]
    async fn category_switch_updates_the_stored_triple() {
        let (handler, session_id) = handler_with_session().await;

        let view = handler
            .handle(category_only(session_id, "BtoB"))
            .await
            .unwrap();
        assert_eq!(view.selection.category, Category::BtoB);
        assert_eq!(
            view.selection.industry.as_str(),
            "IT・SaaS業界（法人向けツール）"
        );
        assert_eq!(view.selection.service.as_str(), "営業支援SaaS（SFA）");

        // The next interaction sees the BtoB triple as its previous state.
        let again = handler
            .handle(category_only(session_id, "BtoB"))
            .await
            .unwrap();
        assert_eq!(again.selection, view.selection);
    }

    #[tokio::test]
    async fn invalid_category_leaves_previous_state_untouched() {
        let (handler, session_id) = handler_with_session().await;

        let before = handler
            .handle(ResolveSelectionCommand {
                session_id,
                category: "BtoC".to_string(),
                industry: Some("飲食業界（レストラン・カフェ）".to_string()),
                service: None,
            })
            .await
            .unwrap();

        let err = handler
            .handle(category_only(session_id, "BtoX"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SelectionFlowError::Selection(SelectionError::InvalidCategory { .. })
        ));

        let after = handler
            .handle(category_only(session_id, "BtoC"))
            .await
            .unwrap();
        assert_eq!(after.selection, before.selection);
    }

    #[tokio::test]
    async fn widget_picks_flow_through_to_the_view() {
        let (handler, session_id) = handler_with_session().await;

        let view = handler
            .handle(ResolveSelectionCommand {
                session_id,
                category: "BtoC".to_string(),
                industry: Some("旅行・観光業界".to_string()),
                service: Some("観光ガイドアプリ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(view.selection.industry.as_str(), "旅行・観光業界");
        assert_eq!(view.selection.service.as_str(), "観光ガイドアプリ");
        assert_eq!(view.service_options.len(), 2);
    }
}
