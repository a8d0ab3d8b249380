//! HTTP routes for the recovery endpoints.

use axum::{routing::post, Router};

use super::handlers::{clear_recovery_cookie, reset_password, RecoveryHandlers};

/// Creates the recovery router. Mounted under `/api`.
pub fn recovery_routes(handlers: RecoveryHandlers) -> Router {
    Router::new()
        .route("/clear-recovery-cookie", post(clear_recovery_cookie))
        .route("/reset-password", post(reset_password))
        .with_state(handlers)
}
