//! HTTP adapters - the axum surface of the backend.

pub mod cookies;
pub mod error;
pub mod middleware;
pub mod recovery;
pub mod share_admin;
pub mod shared_list;

pub use error::ErrorResponse;
pub use middleware::{access_guard, AccessGuardState, RequireAuth};
pub use recovery::{recovery_routes, RecoveryHandlers};
pub use share_admin::{share_admin_routes, ShareAdminHandlers};
pub use shared_list::{shared_list_routes, SharedListHandlers};
