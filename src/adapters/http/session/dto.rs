//! HTTP DTOs for session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing
//! independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::selection::SelectionView;
use crate::application::handlers::session::CreateSessionResult;

/// The raw selection widgets as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSelectionRequest {
    pub category: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
}

/// The analysis target plus the widget option lists derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionResponse {
    pub category: String,
    pub category_label: String,
    pub industry: String,
    pub service: String,
    pub summary: String,
    pub industry_options: Vec<String>,
    pub service_options: Vec<String>,
}

impl From<SelectionView> for SelectionResponse {
    fn from(view: SelectionView) -> Self {
        Self {
            category: view.selection.category.as_str().to_string(),
            category_label: view.selection.category.display_name().to_string(),
            industry: view.selection.industry.as_str().to_string(),
            service: view.selection.service.as_str().to_string(),
            summary: view.summary,
            industry_options: view
                .industry_options
                .iter()
                .map(|s| s.to_string())
                .collect(),
            service_options: view.service_options.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Response for session creation.
#[derive(Debug, Clone, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: String,
    pub created_at: String,
    pub selection: SelectionResponse,
}

impl From<CreateSessionResult> for SessionCreatedResponse {
    fn from(result: CreateSessionResult) -> Self {
        Self {
            session_id: result.session_id.to_string(),
            created_at: result.created_at.as_datetime().to_rfc3339(),
            selection: result.view.into(),
        }
    }
}
