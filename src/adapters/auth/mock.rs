//! Mock authentication adapters for testing.
//!
//! These adapters implement the `SessionResolver` and `AuthGateway` ports
//! for use in tests, avoiding the need for a real auth provider.

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, Session, UserId};
use crate::ports::{AuthGateway, SessionResolver};

/// Mock session resolver for testing.
///
/// Stores a map of tokens to users. Tokens not in the map resolve to the
/// anonymous session, matching the port's degrade-don't-fail contract.
#[derive(Debug, Default)]
pub struct MockSessionResolver {
    /// Map of valid tokens to their associated users
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
}

impl MockSessionResolver {
    /// Creates a new empty mock resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.write().unwrap().insert(token.into(), user);
        self
    }

    /// Adds a valid token with a simple test user.
    pub fn with_test_user(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let user = AuthenticatedUser::new(
            UserId::new(&user_id).unwrap(),
            Some(format!("{}@test.example.com", user_id)),
            true,
        );
        self.with_user(token, user)
    }

    /// Registers a new valid token at runtime.
    pub fn add_token(&self, token: impl Into<String>, user: AuthenticatedUser) {
        self.tokens.write().unwrap().insert(token.into(), user);
    }

    /// Removes a token, making it resolve anonymous.
    pub fn remove_token(&self, token: &str) {
        self.tokens.write().unwrap().remove(token);
    }
}

#[async_trait]
impl SessionResolver for MockSessionResolver {
    async fn resolve(&self, access_token: Option<&str>) -> Session {
        access_token
            .and_then(|token| self.tokens.read().unwrap().get(token).cloned())
            .map(Session::authenticated)
            .unwrap_or_else(Session::anonymous)
    }
}

/// Mock auth gateway for testing.
///
/// Records password updates and sign-outs; unknown tokens are rejected.
#[derive(Debug, Default)]
pub struct MockAuthGateway {
    /// Tokens the gateway accepts
    valid_tokens: RwLock<HashMap<String, ()>>,
    /// Recorded (token, new_password) update calls
    updates: Mutex<Vec<(String, String)>>,
    /// Recorded sign-out tokens
    sign_outs: Mutex<Vec<String>>,
    /// Optional error to return for all calls (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl MockAuthGateway {
    /// Creates a new empty mock gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts the given token.
    pub fn with_valid_token(self, token: impl Into<String>) -> Self {
        self.valid_tokens.write().unwrap().insert(token.into(), ());
        self
    }

    /// Forces all calls to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Recorded password updates.
    pub fn updates(&self) -> Vec<(String, String)> {
        self.updates.lock().unwrap().clone()
    }

    /// Recorded sign-outs.
    pub fn sign_outs(&self) -> Vec<String> {
        self.sign_outs.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn update_password(
        &self,
        access_token: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }
        if !self.valid_tokens.read().unwrap().contains_key(access_token) {
            return Err(AuthError::InvalidToken);
        }
        self.updates
            .lock()
            .unwrap()
            .push((access_token.to_string(), new_password.to_string()));
        Ok(())
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }
        if !self.valid_tokens.read().unwrap().contains_key(access_token) {
            return Err(AuthError::InvalidToken);
        }
        self.sign_outs.lock().unwrap().push(access_token.to_string());
        Ok(())
    }
}
