//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::selection::{
    GetSelectionHandler, ResolveSelectionCommand, ResolveSelectionHandler, SelectionFlowError,
};
use crate::application::handlers::session::{CreateSessionHandler, EndSessionHandler};
use crate::domain::foundation::SessionId;
use crate::domain::selection::SelectionError;
use crate::ports::StateStoreError;

use super::dto::{RawSelectionRequest, SelectionResponse, SessionCreatedResponse};

#[derive(Clone)]
pub struct SessionHandlers {
    create_handler: Arc<CreateSessionHandler>,
    get_selection_handler: Arc<GetSelectionHandler>,
    resolve_handler: Arc<ResolveSelectionHandler>,
    end_handler: Arc<EndSessionHandler>,
}

impl SessionHandlers {
    pub fn new(
        create_handler: Arc<CreateSessionHandler>,
        get_selection_handler: Arc<GetSelectionHandler>,
        resolve_handler: Arc<ResolveSelectionHandler>,
        end_handler: Arc<EndSessionHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_selection_handler,
            resolve_handler,
            end_handler,
        }
    }
}

/// POST /api/sessions - Start a worksheet session
pub async fn create_session(State(handlers): State<SessionHandlers>) -> Response {
    match handlers.create_handler.handle().await {
        Ok(result) => {
            let response: SessionCreatedResponse = result.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => store_error_response(e),
    }
}

/// GET /api/sessions/:id/selection - Current analysis target
pub async fn get_selection(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_selection_handler.handle(session_id).await {
        Ok(view) => {
            let response: SelectionResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => store_error_response(e),
    }
}

/// POST /api/sessions/:id/selection - Reconcile the analysis target
pub async fn resolve_selection(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
    Json(request): Json<RawSelectionRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ResolveSelectionCommand {
        session_id,
        category: request.category,
        industry: request.industry,
        service: request.service,
    };

    match handlers.resolve_handler.handle(cmd).await {
        Ok(view) => {
            let response: SelectionResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => flow_error_response(e),
    }
}

/// DELETE /api/sessions/:id - End a session
pub async fn end_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.end_handler.handle(session_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => store_error_response(e),
    }
}

pub(crate) fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

pub(crate) fn store_error_response(error: StateStoreError) -> Response {
    match error {
        StateStoreError::SessionNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(format!("Session not found: {}", id))),
        )
            .into_response(),
        StateStoreError::SessionExists(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal("Session state conflict")),
        )
            .into_response(),
    }
}

pub(crate) fn flow_error_response(error: SelectionFlowError) -> Response {
    match error {
        SelectionFlowError::Selection(SelectionError::InvalidCategory { given }) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::invalid_category(format!(
                "Invalid category: {}",
                given
            ))),
        )
            .into_response(),
        SelectionFlowError::Store(e) => store_error_response(e),
    }
}
