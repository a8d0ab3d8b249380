//! Authentication configuration

use secrecy::SecretString;
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Authentication configuration (hosted GoTrue-style provider)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the auth service (e.g. "https://xyz.supabase.co/auth/v1")
    pub provider_url: String,

    /// Publishable API key sent with every auth service request
    pub anon_key: SecretString,

    /// Shared secret the provider signs access tokens with (HS256)
    pub jwt_secret: SecretString,

    /// Expected audience claim in access tokens
    #[serde(default = "default_jwt_audience")]
    pub jwt_audience: String,

    /// Cookie the frontend stores the access token in
    #[serde(default = "default_access_token_cookie")]
    pub access_token_cookie: String,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// In production, requires HTTPS for the provider URL.
    /// In development, allows localhost with HTTP/HTTPS.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        use secrecy::ExposeSecret;

        if self.provider_url.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_PROVIDER_URL"));
        }
        if self.anon_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_ANON_KEY"));
        }
        if self.jwt_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_JWT_SECRET"));
        }
        if self.jwt_audience.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_JWT_AUDIENCE"));
        }
        if self.access_token_cookie.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_ACCESS_TOKEN_COOKIE"));
        }

        // In production, require HTTPS
        if *environment == Environment::Production && !self.provider_url.starts_with("https://") {
            return Err(ValidationError::ProviderMustBeHttps);
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider_url: String::new(),
            anon_key: SecretString::new(String::new()),
            jwt_secret: SecretString::new(String::new()),
            jwt_audience: default_jwt_audience(),
            access_token_cookie: default_access_token_cookie(),
        }
    }
}

fn default_jwt_audience() -> String {
    "authenticated".to_string()
}

fn default_access_token_cookie() -> String {
    "sb-access-token".to_string()
}
