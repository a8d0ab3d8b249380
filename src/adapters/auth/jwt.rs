//! JWT adapter for session resolution.
//!
//! The hosted auth provider signs access tokens with a shared HS256
//! secret, so identity can be resolved locally: validate the signature,
//! expiry, and audience, then map claims to the domain
//! `AuthenticatedUser`. No network call is involved.
//!
//! Per the resolver contract, every failure degrades to the anonymous
//! session; a bad token is the visitor's ordinary logged-out state, not
//! an error.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::{AuthenticatedUser, Session, UserId};
use crate::ports::SessionResolver;

/// Claims this backend reads from the provider's access tokens.
#[derive(Debug, Deserialize)]
struct AccessTokenClaims {
    /// Subject - the user ID.
    sub: String,

    /// User's email address.
    #[serde(default)]
    email: Option<String>,

    /// Whether the email is verified.
    #[serde(default)]
    email_verified: Option<bool>,
}

/// Session resolver validating the provider's HS256 access tokens.
pub struct JwtSessionResolver {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionResolver {
    /// Creates a resolver for tokens signed with `jwt_secret` and issued
    /// for `audience`.
    pub fn new(jwt_secret: &SecretString, audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience]);
        Self {
            decoding_key: DecodingKey::from_secret(jwt_secret.expose_secret().as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl SessionResolver for JwtSessionResolver {
    async fn resolve(&self, access_token: Option<&str>) -> Session {
        let Some(token) = access_token else {
            return Session::anonymous();
        };

        match decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => match UserId::new(data.claims.sub) {
                Ok(id) => Session::authenticated(AuthenticatedUser::new(
                    id,
                    data.claims.email,
                    data.claims.email_verified.unwrap_or(false),
                )),
                Err(_) => {
                    tracing::debug!("access token carries an empty subject");
                    Session::anonymous()
                }
            },
            Err(err) => {
                tracing::debug!(error = %err, "access token rejected, caller treated as anonymous");
                Session::anonymous()
            }
        }
    }
}
