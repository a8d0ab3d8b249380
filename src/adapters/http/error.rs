//! Shared JSON error body for HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::handlers::{ShareAdminError, ShareGateError};
use crate::domain::foundation::{AuthError, ErrorCode};
use crate::domain::list::ListError;
use crate::domain::share::ShareError;

/// JSON error body: `{ "error": ..., "code": ... }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            error: message.into(),
            code: code.to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: ErrorCode::InvalidFormat.to_string(),
        }
    }
}

/// Maps a share error to its HTTP response.
pub fn share_error_response(err: &ShareError) -> Response {
    let status = match err {
        ShareError::NotAvailable | ShareError::NotFound => StatusCode::NOT_FOUND,
        ShareError::InvalidPassword => StatusCode::UNAUTHORIZED,
        ShareError::AlreadyShared => StatusCode::CONFLICT,
        ShareError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = match err {
        // Storage details stay out of responses.
        ShareError::Database(_) => {
            ErrorResponse::new("Internal error", ErrorCode::InternalError)
        }
        other => ErrorResponse::new(other.to_string(), other.code()),
    };
    (status, Json(body)).into_response()
}

/// Maps a list error to its HTTP response.
pub fn list_error_response(err: &ListError) -> Response {
    let status = match err {
        ListError::NotFound => StatusCode::NOT_FOUND,
        ListError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = match err {
        ListError::Database(_) => ErrorResponse::new("Internal error", ErrorCode::InternalError),
        other => ErrorResponse::new(other.to_string(), other.code()),
    };
    (status, Json(body)).into_response()
}

/// Maps a share gate error to its HTTP response.
pub fn share_gate_error_response(err: &ShareGateError) -> Response {
    match err {
        ShareGateError::Share(err) => share_error_response(err),
        ShareGateError::List(err) => list_error_response(err),
    }
}

/// Maps a share admin error to its HTTP response.
pub fn share_admin_error_response(err: &ShareAdminError) -> Response {
    match err {
        ShareAdminError::Share(err) => share_error_response(err),
        ShareAdminError::List(err) => list_error_response(err),
    }
}

/// Maps an auth error to its HTTP response.
pub fn auth_error_response(err: &AuthError) -> Response {
    let status = match err {
        AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
        AuthError::RecoverySessionExpired => StatusCode::UNAUTHORIZED,
        AuthError::PasswordUpdateRejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AuthError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    let body = serde_json::json!({
        "error": err.to_string(),
        "code": err.code(),
    });
    (status, Json(body)).into_response()
}
