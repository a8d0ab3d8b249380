//! Access guard middleware.
//!
//! Runs in front of every route: resolves the session from the access
//! token cookie, parses the recovery flag, asks the domain guard for a
//! decision, and applies it - redirect, or pass through with the decided
//! cookie mutation appended to the response. On allow, a resolved
//! identity is placed in the request extensions for handlers using
//! [`super::RequireAuth`].

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::adapters::http::cookies::{build_cookie, expire_cookie, request_cookie};
use crate::domain::access::{
    decide, CookieEffect, GuardDecision, GuardInput, RecoveryFlag, RoutePolicy,
    RECOVERY_COOKIE_NAME, RECOVERY_COOKIE_VALUE,
};
use crate::ports::SessionResolver;

/// State the guard middleware runs with.
#[derive(Clone)]
pub struct AccessGuardState {
    pub resolver: Arc<dyn SessionResolver>,
    pub policy: Arc<RoutePolicy>,
    /// Cookie the frontend stores the access token in.
    pub access_token_cookie: String,
    /// Lifetime of the recovery cookie when minted.
    pub recovery_ttl: Duration,
}

/// The middleware itself. Apply with `middleware::from_fn_with_state`.
pub async fn access_guard(
    State(state): State<AccessGuardState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    let is_recovery_link = has_recovery_marker(request.uri().query());

    let token = request_cookie(request.headers(), &state.access_token_cookie)
        .map(str::to_owned);
    let recovery = RecoveryFlag::from_cookie_value(request_cookie(
        request.headers(),
        RECOVERY_COOKIE_NAME,
    ));

    let session = state.resolver.resolve(token.as_deref()).await;

    let input = GuardInput {
        path: &path,
        is_recovery_link,
        authenticated: session.is_authenticated(),
        recovery,
    };
    let decision = decide(&state.policy, &input);

    tracing::debug!(
        %path,
        class = ?state.policy.classify(&path),
        authenticated = input.authenticated,
        recovery = recovery.is_present(),
        ?decision,
        "access guard decision"
    );

    match decision {
        GuardDecision::Redirect { target } => {
            Redirect::temporary(target.path(&state.policy)).into_response()
        }
        GuardDecision::Allow { cookie } => {
            if let Some(user) = session.into_user() {
                request.extensions_mut().insert(user);
            }

            let mut response = next.run(request).await;
            match cookie {
                Some(CookieEffect::SetRecovery) => append_set_cookie(
                    &mut response,
                    &build_cookie(
                        RECOVERY_COOKIE_NAME,
                        RECOVERY_COOKIE_VALUE,
                        state.recovery_ttl.as_secs(),
                    ),
                ),
                Some(CookieEffect::ClearRecovery) => {
                    append_set_cookie(&mut response, &expire_cookie(RECOVERY_COOKIE_NAME))
                }
                None => {}
            }
            response
        }
    }
}

/// True when the query string carries the reset-email marker.
fn has_recovery_marker(query: Option<&str>) -> bool {
    query.is_some_and(|q| q.split('&').any(|pair| pair == "type=recovery"))
}

fn append_set_cookie(response: &mut Response, cookie: &str) {
    match HeaderValue::from_str(cookie) {
        Ok(value) => {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to encode Set-Cookie header");
        }
    }
}
