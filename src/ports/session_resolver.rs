//! Session resolution port.
//!
//! Determines the caller's identity from the access token carried in the
//! request cookies. This is the guard's one outbound lookup per request.
//!
//! # Contract
//!
//! Resolution is infallible by design: a missing, malformed, or expired
//! credential degrades to the anonymous session. Downstream components
//! treat absence of identity as the default case, never as an error, and
//! no retries are performed.

use async_trait::async_trait;

use crate::domain::foundation::Session;

/// Resolves request credentials into a [`Session`].
#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// Resolves the raw access token (without any prefix) into a session.
    ///
    /// `None` or an invalid token yields [`Session::anonymous`].
    async fn resolve(&self, access_token: Option<&str>) -> Session;
}
