//! Recovery endpoints - cookie clearing and password reset submission.

mod dto;
mod handlers;
mod routes;

pub use handlers::RecoveryHandlers;
pub use routes::recovery_routes;
