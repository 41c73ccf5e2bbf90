//! HTTP handlers for worksheet endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::session::handlers::{flow_error_response, parse_session_id};
use crate::application::handlers::worksheet::{RenderViewCommand, RenderViewHandler};

use super::dto::{RenderViewRequest, ViewResponse};

#[derive(Clone)]
pub struct WorksheetHandlers {
    render_handler: Arc<RenderViewHandler>,
}

impl WorksheetHandlers {
    pub fn new(render_handler: Arc<RenderViewHandler>) -> Self {
        Self { render_handler }
    }
}

/// POST /api/sessions/:id/view - Recompute the whole worksheet view
pub async fn render_view(
    State(handlers): State<WorksheetHandlers>,
    Path(session_id): Path<String>,
    Json(request): Json<RenderViewRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = RenderViewCommand {
        session_id,
        category: request.selection.category,
        industry: request.selection.industry,
        service: request.selection.service,
        tabs: request.tabs,
    };

    match handlers.render_handler.handle(cmd).await {
        Ok(view) => {
            let response: ViewResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => flow_error_response(e),
    }
}
