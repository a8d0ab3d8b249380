//! HTTP routes for share administration.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{create_share, delete_share, list_shares, ShareAdminHandlers};

/// Creates the share administration router. Mounted under `/api`.
pub fn share_admin_routes(handlers: ShareAdminHandlers) -> Router {
    Router::new()
        .route("/lists/:id/shares", post(create_share))
        .route("/lists/:id/shares", get(list_shares))
        .route("/shares/:id", delete(delete_share))
        .with_state(handlers)
}
