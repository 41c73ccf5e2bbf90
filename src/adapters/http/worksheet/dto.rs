//! HTTP DTOs for worksheet endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::session::dto::{RawSelectionRequest, SelectionResponse};
use crate::application::handlers::worksheet::{TabInputs, TabPanels, WorksheetView};

/// The inputs snapshot for one whole-view interaction.
///
/// `tabs` may be partial or absent; missing widgets fall back to their
/// defaults, exactly like an untouched page.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderViewRequest {
    pub selection: RawSelectionRequest,
    #[serde(default)]
    pub tabs: TabInputs,
}

/// The recomputed whole view.
///
/// Tab panels are already wire-shaped domain output; only the selection is
/// re-mapped so the wire form stays decoupled from the domain triple.
#[derive(Debug, Clone, Serialize)]
pub struct ViewResponse {
    pub session_id: String,
    pub selection: SelectionResponse,
    pub tabs: TabPanels,
}

impl From<WorksheetView> for ViewResponse {
    fn from(view: WorksheetView) -> Self {
        Self {
            session_id: view.session_id.to_string(),
            selection: view.selection.into(),
            tabs: view.tabs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_view_request_accepts_a_minimal_snapshot() {
        let request: RenderViewRequest =
            serde_json::from_str(r#"{ "selection": { "category": "BtoB" } }"#).unwrap();
        assert_eq!(request.selection.category, "BtoB");
        assert_eq!(request.selection.industry, None);
        assert_eq!(request.tabs.persona.sample_size, 200);
    }

    #[test]
    fn tab_inputs_deserialize_partially() {
        let request: RenderViewRequest = serde_json::from_str(
            r#"{
                "selection": { "category": "BtoC" },
                "tabs": { "growth": { "periods": 36 } }
            }"#,
        )
        .unwrap();
        assert_eq!(request.tabs.growth.periods, 36);
        assert_eq!(request.tabs.ab_effect.sample_size, 40);
    }
}
