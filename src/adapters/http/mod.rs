//! HTTP adapters - REST API implementations.
//!
//! Each feature area has its own directory with DTOs, handlers, and routes.
//! The whole API is assembled here, together with the liveness endpoint.

pub mod error;
pub mod session;
pub mod worksheet;

use std::sync::Arc;

use axum::{routing::get, Json, Router};

use crate::application::handlers::selection::{GetSelectionHandler, ResolveSelectionHandler};
use crate::application::handlers::session::{CreateSessionHandler, EndSessionHandler};
use crate::application::handlers::worksheet::RenderViewHandler;
use crate::ports::StateStore;

pub use error::ErrorResponse;
pub use session::SessionHandlers;
pub use worksheet::WorksheetHandlers;

/// Builds the full API router over a state store.
pub fn api_router(store: Arc<dyn StateStore>) -> Router {
    let session_handlers = SessionHandlers::new(
        Arc::new(CreateSessionHandler::new(store.clone())),
        Arc::new(GetSelectionHandler::new(store.clone())),
        Arc::new(ResolveSelectionHandler::new(store.clone())),
        Arc::new(EndSessionHandler::new(store.clone())),
    );
    let worksheet_handlers = WorksheetHandlers::new(Arc::new(RenderViewHandler::new(store)));

    Router::new().route("/health", get(health)).nest(
        "/api/sessions",
        session::session_routes(session_handlers)
            .merge(worksheet::worksheet_routes(worksheet_handlers)),
    )
}

/// GET /health - liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStateStore;

    #[test]
    fn api_router_assembles() {
        let store = Arc::new(InMemoryStateStore::new());
        let _router = api_router(store);
    }
}
