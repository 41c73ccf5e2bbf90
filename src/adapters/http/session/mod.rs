//! HTTP adapter for session endpoints.
//!
//! - `POST /api/sessions` - Start a worksheet session
//! - `GET /api/sessions/:id/selection` - Current analysis target
//! - `POST /api/sessions/:id/selection` - Reconcile the analysis target
//! - `DELETE /api/sessions/:id` - End a session

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::SessionHandlers;
pub use routes::session_routes;
