//! HTTP routes for the shared list view.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{resolve_shared_list, unlock_shared_list, SharedListHandlers};

/// Creates the shared list router. Mounted under `/api`.
pub fn shared_list_routes(handlers: SharedListHandlers) -> Router {
    Router::new()
        .route("/shared-lists/:id", get(resolve_shared_list))
        .route("/shared-lists/:id/unlock", post(unlock_shared_list))
        .with_state(handlers)
}
