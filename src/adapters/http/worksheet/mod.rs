//! HTTP adapter for worksheet endpoints.
//!
//! - `POST /api/sessions/:id/view` - Recompute the whole worksheet view

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::WorksheetHandlers;
pub use routes::worksheet_routes;
