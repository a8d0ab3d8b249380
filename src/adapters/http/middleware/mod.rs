//! HTTP middleware for axum.
//!
//! - `access_guard` - per-request allow/redirect decision and session
//!   injection
//! - `auth` - extractor reading the injected identity

mod access_guard;
mod auth;

pub use access_guard::{access_guard, AccessGuardState};
pub use auth::{AuthRejection, RequireAuth};
