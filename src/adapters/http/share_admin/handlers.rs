//! HTTP handlers for share administration (owner-side).

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{share_admin_error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{
    CreateShareCommand, CreateShareHandler, DeleteShareHandler, ListSharesHandler,
};
use crate::domain::foundation::{ListId, ShareId};

use super::dto::{CreateShareRequest, ShareListResponse, ShareResponse};

/// Handler state for the share administration endpoints.
#[derive(Clone)]
pub struct ShareAdminHandlers {
    create_handler: Arc<CreateShareHandler>,
    list_handler: Arc<ListSharesHandler>,
    delete_handler: Arc<DeleteShareHandler>,
}

impl ShareAdminHandlers {
    pub fn new(
        create_handler: Arc<CreateShareHandler>,
        list_handler: Arc<ListSharesHandler>,
        delete_handler: Arc<DeleteShareHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            delete_handler,
        }
    }
}

/// POST /api/lists/:id/shares - share a list.
pub async fn create_share(
    State(handlers): State<ShareAdminHandlers>,
    RequireAuth(user): RequireAuth,
    Path(list_id): Path<String>,
    Json(req): Json<CreateShareRequest>,
) -> Response {
    let list_id = match parse_id::<ListId>(&list_id, "Invalid list ID") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = CreateShareCommand {
        list_id,
        owner: user.id,
        permission: req.permission,
        password: req.password,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(share) => (
            StatusCode::CREATED,
            Json(ShareResponse::from_share(&share)),
        )
            .into_response(),
        Err(err) => share_admin_error_response(&err),
    }
}

/// GET /api/lists/:id/shares - the owner's shares for a list.
pub async fn list_shares(
    State(handlers): State<ShareAdminHandlers>,
    RequireAuth(user): RequireAuth,
    Path(list_id): Path<String>,
) -> Response {
    let list_id = match parse_id::<ListId>(&list_id, "Invalid list ID") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.list_handler.handle(list_id, &user.id).await {
        Ok(shares) => {
            let response = ShareListResponse {
                shares: shares.iter().map(ShareResponse::from_share).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => share_admin_error_response(&err),
    }
}

/// DELETE /api/shares/:id - revoke a share.
pub async fn delete_share(
    State(handlers): State<ShareAdminHandlers>,
    RequireAuth(user): RequireAuth,
    Path(share_id): Path<String>,
) -> Response {
    let share_id = match parse_id::<ShareId>(&share_id, "Invalid share ID") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.delete_handler.handle(share_id, &user.id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => share_admin_error_response(&err),
    }
}

fn parse_id<T: std::str::FromStr>(raw: &str, message: &str) -> Result<T, Response> {
    raw.parse::<T>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(message)),
        )
            .into_response()
    })
}
