//! HTTP routes for worksheet endpoints.

use axum::{routing::post, Router};

use super::handlers::{render_view, WorksheetHandlers};

/// Creates the worksheet router with all endpoints.
pub fn worksheet_routes(handlers: WorksheetHandlers) -> Router {
    Router::new()
        .route("/:id/view", post(render_view))
        .with_state(handlers)
}
