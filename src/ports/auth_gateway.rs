//! Auth provider gateway port.
//!
//! The reset flow needs two calls against the hosted auth service: update
//! the password of the session's user and end that session. Signup, login,
//! and the reset-email dispatch are handled by the provider directly and
//! never pass through this backend.

use async_trait::async_trait;

use crate::domain::foundation::AuthError;

/// Outbound operations against the auth provider.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Updates the password of the user the access token belongs to.
    ///
    /// # Returns
    ///
    /// * `Err(AuthError::InvalidToken)` - the token was rejected
    /// * `Err(AuthError::PasswordUpdateRejected)` - provider-side policy
    ///   rejection (e.g. password too short)
    /// * `Err(AuthError::ServiceUnavailable)` - provider unreachable
    async fn update_password(&self, access_token: &str, new_password: &str)
        -> Result<(), AuthError>;

    /// Ends the session the access token belongs to.
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;
}
