//! Reset-password handler - the submission step of the recovery flow.

use std::sync::Arc;

use crate::domain::access::RecoveryFlag;
use crate::domain::foundation::AuthError;
use crate::ports::AuthGateway;

/// Command to set a new password for the recovering user.
#[derive(Debug, Clone)]
pub struct ResetPasswordCommand {
    /// Access token from the request cookies, if any.
    pub access_token: Option<String>,
    /// Recovery flag parsed from the request cookies.
    pub recovery: RecoveryFlag,
    /// The new password.
    pub new_password: String,
}

/// Handler updating the password through the auth gateway.
pub struct ResetPasswordHandler {
    gateway: Arc<dyn AuthGateway>,
}

impl ResetPasswordHandler {
    pub fn new(gateway: Arc<dyn AuthGateway>) -> Self {
        Self { gateway }
    }

    /// Performs the reset.
    ///
    /// An absent recovery flag means the one-hour window lapsed (or the
    /// caller never came from a reset link); that case is reported as
    /// `RecoverySessionExpired`, distinct from credential failures, so
    /// the user is told to request a new link rather than retry.
    ///
    /// After a successful update the session is ended - the recovering
    /// browser must sign in again with the new password.
    pub async fn handle(&self, cmd: ResetPasswordCommand) -> Result<(), AuthError> {
        if cmd.recovery.is_absent() {
            return Err(AuthError::RecoverySessionExpired);
        }

        let token = cmd.access_token.ok_or(AuthError::InvalidToken)?;

        if cmd.new_password.is_empty() {
            return Err(AuthError::PasswordUpdateRejected(
                "Password must not be empty".to_string(),
            ));
        }

        self.gateway
            .update_password(&token, &cmd.new_password)
            .await?;

        if let Err(err) = self.gateway.sign_out(&token).await {
            // The password is already changed; a failed sign-out only
            // leaves the old session running until it expires.
            tracing::warn!(error = %err, "sign-out after password reset failed");
        }

        Ok(())
    }
}
