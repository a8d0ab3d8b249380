//! Access control - route classification, recovery mode, and the guard.
//!
//! Everything in this module is pure: decisions are values, and cookie
//! mutations are directives applied by the HTTP adapter.

mod guard;
mod recovery;
mod route;

pub use guard::{decide, CookieEffect, GuardDecision, GuardInput, RedirectTarget};
pub use recovery::{
    RecoveryFlag, RECOVERY_COOKIE_NAME, RECOVERY_COOKIE_VALUE, RECOVERY_TTL_SECS,
};
pub use route::{RouteClass, RoutePolicy};
