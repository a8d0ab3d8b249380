//! HTTP handlers for the shared list view (the share gate over HTTP).

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{share_gate_error_response, ErrorResponse};
use crate::application::handlers::{ResolveShareHandler, ShareView, SubmitPasswordHandler};
use crate::domain::foundation::ListId;

use super::dto::{SharedListResponse, UnlockRequest};

/// Handler state for the shared list endpoints.
#[derive(Clone)]
pub struct SharedListHandlers {
    resolve_handler: Arc<ResolveShareHandler>,
    submit_handler: Arc<SubmitPasswordHandler>,
}

impl SharedListHandlers {
    pub fn new(
        resolve_handler: Arc<ResolveShareHandler>,
        submit_handler: Arc<SubmitPasswordHandler>,
    ) -> Self {
        Self {
            resolve_handler,
            submit_handler,
        }
    }
}

/// GET /api/shared-lists/:id - resolve the share for a list.
pub async fn resolve_shared_list(
    State(handlers): State<SharedListHandlers>,
    Path(list_id): Path<String>,
) -> Response {
    let list_id = match parse_list_id(&list_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.resolve_handler.handle(list_id).await {
        Ok(view) => view_response(view),
        Err(err) => share_gate_error_response(&err),
    }
}

/// POST /api/shared-lists/:id/unlock - submit the share password.
pub async fn unlock_shared_list(
    State(handlers): State<SharedListHandlers>,
    Path(list_id): Path<String>,
    Json(req): Json<UnlockRequest>,
) -> Response {
    let list_id = match parse_list_id(&list_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.submit_handler.handle(list_id, &req.password).await {
        Ok(view) => view_response(view),
        Err(err) => share_gate_error_response(&err),
    }
}

fn parse_list_id(raw: &str) -> Result<ListId, Response> {
    raw.parse::<ListId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid list ID")),
        )
            .into_response()
    })
}

fn view_response(view: ShareView) -> Response {
    let body = match view {
        ShareView::PasswordRequired => SharedListResponse::PasswordRequired,
        ShareView::Granted { permission, data } => {
            SharedListResponse::granted(permission, &data)
        }
    };
    (StatusCode::OK, Json(body)).into_response()
}
