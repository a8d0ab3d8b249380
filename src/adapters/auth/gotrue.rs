//! GoTrue-style auth service adapter.
//!
//! Implements the `AuthGateway` port against the hosted auth service's
//! REST endpoints. Only the two calls the reset flow needs are wired:
//! `PUT /user` (password update) and `POST /logout`.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::AuthError;
use crate::ports::AuthGateway;

/// Configuration for the auth service adapter.
#[derive(Debug, Clone)]
pub struct GoTrueConfig {
    /// Base URL of the service (e.g. "https://xyz.supabase.co/auth/v1").
    pub base_url: String,

    /// Publishable API key sent with every request.
    pub anon_key: SecretString,
}

impl GoTrueConfig {
    /// Creates a new configuration.
    pub fn new(base_url: impl Into<String>, anon_key: SecretString) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key,
        }
    }

    fn user_url(&self) -> String {
        format!("{}/user", self.base_url.trim_end_matches('/'))
    }

    fn logout_url(&self) -> String {
        format!("{}/logout", self.base_url.trim_end_matches('/'))
    }
}

/// Error body the auth service returns on rejection.
#[derive(Debug, Deserialize)]
struct GoTrueErrorBody {
    #[serde(default, alias = "msg", alias = "error_description")]
    message: Option<String>,
}

/// Production implementation of `AuthGateway`.
pub struct GoTrueAuthGateway {
    config: GoTrueConfig,
    http_client: reqwest::Client,
}

impl GoTrueAuthGateway {
    /// Creates a new gateway.
    pub fn new(config: GoTrueConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    async fn rejection_message(response: reqwest::Response) -> String {
        response
            .json::<GoTrueErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| "rejected by auth service".to_string())
    }
}

#[async_trait]
impl AuthGateway for GoTrueAuthGateway {
    async fn update_password(
        &self,
        access_token: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let response = self
            .http_client
            .put(self.config.user_url())
            .header("apikey", self.config.anon_key.expose_secret())
            .bearer_auth(access_token)
            .json(&serde_json::json!({ "password": new_password }))
            .send()
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidToken);
        }
        if status.is_client_error() {
            let message = Self::rejection_message(response).await;
            tracing::warn!(%status, %message, "auth service rejected password update");
            return Err(AuthError::PasswordUpdateRejected(message));
        }
        Err(AuthError::service_unavailable(format!(
            "auth service returned {status}"
        )))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .http_client
            .post(self.config.logout_url())
            .header("apikey", self.config.anon_key.expose_secret())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidToken);
        }
        Err(AuthError::service_unavailable(format!(
            "auth service returned {status}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GoTrueConfig {
        GoTrueConfig::new(
            "https://auth.example.com/auth/v1",
            SecretString::new("anon-key".to_string()),
        )
    }

    #[test]
    fn user_url_appends_path() {
        assert_eq!(config().user_url(), "https://auth.example.com/auth/v1/user");
    }

    #[test]
    fn logout_url_appends_path() {
        assert_eq!(
            config().logout_url(),
            "https://auth.example.com/auth/v1/logout"
        );
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let config = GoTrueConfig::new(
            "https://auth.example.com/auth/v1/",
            SecretString::new("anon-key".to_string()),
        );
        assert_eq!(config.user_url(), "https://auth.example.com/auth/v1/user");
    }

    #[test]
    fn error_body_reads_msg_alias() {
        let body: GoTrueErrorBody = serde_json::from_str(r#"{"msg":"weak password"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("weak password"));
    }
}
