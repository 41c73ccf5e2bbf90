//! Shared selection-state plumbing: the three store keys, load/write
//! helpers, and the view returned to callers.

use serde::Serialize;

use crate::domain::foundation::SessionId;
use crate::domain::selection::{Selection, StoredSelection};
use crate::domain::taxonomy;
use crate::ports::{StateStore, StateStoreError};

/// The three keys the selection subsystem owns in the session store.
pub const KEY_CATEGORY: &str = "category";
pub const KEY_INDUSTRY: &str = "industry";
pub const KEY_SERVICE: &str = "service";

/// A resolved selection together with the widget option lists derived from
/// it, in the same dependency order the resolver used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionView {
    pub selection: Selection,
    pub summary: String,
    pub industry_options: Vec<&'static str>,
    pub service_options: Vec<&'static str>,
}

impl SelectionView {
    pub fn from_selection(selection: Selection) -> Self {
        let industry_options = taxonomy::industries_of(selection.category).to_vec();
        let service_options = taxonomy::services_of(selection.industry.as_str()).to_vec();
        Self {
            summary: selection.summary(),
            selection,
            industry_options,
            service_options,
        }
    }
}

/// Loads the previously stored triple. The category is returned separately
/// because read paths re-run the resolver against it.
pub(crate) async fn load_stored(
    store: &dyn StateStore,
    session_id: &SessionId,
) -> Result<(Option<String>, StoredSelection), StateStoreError> {
    let category = store.get(session_id, KEY_CATEGORY).await?;
    let industry = store.get(session_id, KEY_INDUSTRY).await?;
    let service = store.get(session_id, KEY_SERVICE).await?;
    Ok((category, StoredSelection { industry, service }))
}

/// Replaces the stored triple with a resolved selection.
///
/// The session owns its store exclusively within an interaction, so the
/// three writes are not observable partially by anyone.
pub(crate) async fn write_selection(
    store: &dyn StateStore,
    session_id: &SessionId,
    selection: &Selection,
) -> Result<(), StateStoreError> {
    store
        .set(
            session_id,
            KEY_CATEGORY,
            selection.category.as_str().to_string(),
        )
        .await?;
    store
        .set(
            session_id,
            KEY_INDUSTRY,
            selection.industry.as_str().to_string(),
        )
        .await?;
    store
        .set(
            session_id,
            KEY_SERVICE,
            selection.service.as_str().to_string(),
        )
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStateStore;

    #[tokio::test]
    async fn write_then_load_round_trips() {
        let store = InMemoryStateStore::new();
        let id = SessionId::new();
        store.create_session(id).await.unwrap();

        let selection = Selection::session_default();
        write_selection(&store, &id, &selection).await.unwrap();

        let (category, stored) = load_stored(&store, &id).await.unwrap();
        assert_eq!(category.as_deref(), Some("BtoC"));
        assert_eq!(stored.industry.as_deref(), Some(selection.industry.as_str()));
        assert_eq!(stored.service.as_deref(), Some(selection.service.as_str()));
    }

    #[test]
    fn view_exposes_the_widget_domains() {
        let view = SelectionView::from_selection(Selection::session_default());
        assert_eq!(view.industry_options.len(), 7);
        assert_eq!(view.service_options[0], "オンライン自習室");
        assert!(view.summary.starts_with("BtoC / "));
    }
}
