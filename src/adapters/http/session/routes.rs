//! HTTP routes for session endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    create_session, end_session, get_selection, resolve_selection, SessionHandlers,
};

/// Creates the session router with all endpoints.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", post(create_session))
        .route(
            "/:id/selection",
            get(get_selection).post(resolve_selection),
        )
        .route("/:id", delete(end_session))
        .with_state(handlers)
}
