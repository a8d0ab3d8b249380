//! Authentication types for the domain layer.
//!
//! These types represent the caller's identity as resolved from the auth
//! provider's access token. They have **no external dependencies** - any
//! provider can populate them via the `SessionResolver` port.

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a validated access token.
///
/// This is a **domain type** with no provider dependencies.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the auth provider.
    pub id: UserId,

    /// User's email address from the token claims, when present.
    pub email: Option<String>,

    /// Whether the user's email has been verified by the auth provider.
    pub email_verified: bool,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, email: Option<String>, email_verified: bool) -> Self {
        Self {
            id,
            email,
            email_verified,
        }
    }
}

/// The caller's identity for one request.
///
/// Constructed once per request by the `SessionResolver` and passed down
/// explicitly; absence of a user is the ordinary anonymous case, not an
/// error.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<AuthenticatedUser>,
}

impl Session {
    /// A session with no identity.
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// A session carrying a resolved identity.
    pub fn authenticated(user: AuthenticatedUser) -> Self {
        Self { user: Some(user) }
    }

    /// Returns true when the session carries an identity.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Returns the resolved user, if any.
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.user.as_ref()
    }

    /// Consumes the session, returning the resolved user, if any.
    pub fn into_user(self) -> Option<AuthenticatedUser> {
        self.user
    }
}

/// Authentication errors surfaced by the auth gateway and reset flow.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The recovery cookie lapsed before the reset was submitted.
    ///
    /// Deliberately distinct from `InvalidToken` so the caller can tell
    /// the user to request a new reset link instead of retrying.
    #[error("Recovery session expired, request a new reset link")]
    RecoverySessionExpired,

    /// The auth provider rejected the password update.
    #[error("Password update rejected: {0}")]
    PasswordUpdateRejected(String),

    /// The authentication service is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }

    /// Stable machine-readable code for HTTP responses.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidToken => "INVALID_TOKEN",
            AuthError::RecoverySessionExpired => "RECOVERY_SESSION_EXPIRED",
            AuthError::PasswordUpdateRejected(_) => "PASSWORD_UPDATE_REJECTED",
            AuthError::ServiceUnavailable(_) => "AUTH_SERVICE_UNAVAILABLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("user-123").unwrap(),
            Some("test@example.com".to_string()),
            true,
        )
    }

    #[test]
    fn anonymous_session_has_no_user() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn authenticated_session_exposes_user() {
        let session = Session::authenticated(test_user());
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().id.as_str(), "user-123");
    }

    #[test]
    fn default_session_is_anonymous() {
        let session = Session::default();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn recovery_expired_is_distinct_from_invalid_token() {
        assert_ne!(
            AuthError::RecoverySessionExpired.code(),
            AuthError::InvalidToken.code()
        );
        assert_eq!(
            format!("{}", AuthError::RecoverySessionExpired),
            "Recovery session expired, request a new reset link"
        );
    }

    #[test]
    fn auth_error_is_transient_for_service_errors() {
        assert!(AuthError::service_unavailable("timeout").is_transient());
        assert!(!AuthError::InvalidToken.is_transient());
        assert!(!AuthError::RecoverySessionExpired.is_transient());
    }
}
