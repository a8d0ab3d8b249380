//! HTTP handlers for the recovery endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::cookies::{expire_cookie, request_cookie};
use crate::adapters::http::error::auth_error_response;
use crate::application::handlers::{ResetPasswordCommand, ResetPasswordHandler};
use crate::domain::access::{RecoveryFlag, RECOVERY_COOKIE_NAME};

use super::dto::{AckResponse, ResetPasswordRequest};

/// Handler state for the recovery endpoints.
#[derive(Clone)]
pub struct RecoveryHandlers {
    reset_handler: Arc<ResetPasswordHandler>,
    /// Cookie the frontend stores the access token in.
    access_token_cookie: String,
}

impl RecoveryHandlers {
    pub fn new(reset_handler: Arc<ResetPasswordHandler>, access_token_cookie: String) -> Self {
        Self {
            reset_handler,
            access_token_cookie,
        }
    }
}

/// POST /api/clear-recovery-cookie - delete the recovery cookie.
///
/// Idempotent: clearing an absent cookie is still an acknowledgement.
pub async fn clear_recovery_cookie() -> Response {
    let mut response = (
        StatusCode::OK,
        Json(AckResponse::new("Recovery cookie cleared")),
    )
        .into_response();
    append_clear_cookie(&mut response);
    response
}

/// POST /api/reset-password - submit the new password.
pub async fn reset_password(
    State(handlers): State<RecoveryHandlers>,
    headers: HeaderMap,
    Json(req): Json<ResetPasswordRequest>,
) -> Response {
    let cmd = ResetPasswordCommand {
        access_token: request_cookie(&headers, &handlers.access_token_cookie)
            .map(str::to_owned),
        recovery: RecoveryFlag::from_cookie_value(request_cookie(&headers, RECOVERY_COOKIE_NAME)),
        new_password: req.password,
    };

    match handlers.reset_handler.handle(cmd).await {
        Ok(()) => {
            let mut response = (
                StatusCode::OK,
                Json(AckResponse::new("Password updated")),
            )
                .into_response();
            append_clear_cookie(&mut response);
            response
        }
        Err(err) => auth_error_response(&err),
    }
}

fn append_clear_cookie(response: &mut Response) {
    let cookie = expire_cookie(RECOVERY_COOKIE_NAME);
    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to encode Set-Cookie header");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clear_recovery_cookie_expires_the_cookie() {
        let response = clear_recovery_cookie().await;

        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(set_cookie.starts_with("IsRecovery=;"));
        assert!(set_cookie.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn clear_recovery_cookie_is_idempotent() {
        // Two calls in a row both succeed and both clear.
        for _ in 0..2 {
            let response = clear_recovery_cookie().await;
            assert_eq!(response.status(), StatusCode::OK);
        }
    }
}
