//! Share administration endpoints - owners creating and revoking shares.

mod dto;
mod handlers;
mod routes;

pub use handlers::ShareAdminHandlers;
pub use routes::share_admin_routes;
