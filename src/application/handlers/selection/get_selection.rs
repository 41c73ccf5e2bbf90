//! GetSelectionHandler - Read-only access to the current triple.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::selection::{self, Selection, SelectionInput};
use crate::ports::{StateStore, StateStoreError};

use super::state::{load_stored, SelectionView};

/// Handler returning the current selection without mutating it.
pub struct GetSelectionHandler {
    store: Arc<dyn StateStore>,
}

impl GetSelectionHandler {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Reads the stored triple and re-runs the pure resolver over it so a
    /// stale store (taxonomy changed underneath) still yields a valid view.
    /// Nothing is written back; the next interaction will reconcile.
    pub async fn handle(&self, session_id: SessionId) -> Result<SelectionView, StateStoreError> {
        let (category, stored) = load_stored(self.store.as_ref(), &session_id).await?;

        let default = Selection::session_default();
        let category = category.unwrap_or_else(|| default.category.as_str().to_string());
        let input = SelectionInput::category_only(&category);

        // A stored category can only be one the resolver wrote, so the only
        // failure path is a stale store; fall back to the session default.
        let resolved =
            selection::resolve(&input, &stored).unwrap_or(default);

        Ok(SelectionView::from_selection(resolved))
    }
}
