//! Route classification for the access guard.
//!
//! Classification is a static lookup over configured route sets, recomputed
//! per request. Anything that matches no rule is private - the guard fails
//! closed.

/// Access category of a request path.
///
/// Reporting precedence when a path belongs to several sets:
/// api > recovery > always-accessible > public > private. The guard itself
/// consumes the individual membership predicates on [`RoutePolicy`] rather
/// than this collapsed class, because its rules need the overlaps (the
/// shared-list view is both public and always-accessible, the reset form is
/// both public and the recovery route).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// API paths bypass the guard entirely.
    Api,
    /// The password-reset form.
    Recovery,
    /// Reachable whether or not the visitor is authenticated.
    AlwaysAccessible,
    /// Reachable only while logged out.
    PublicForLoggedOut,
    /// Everything else - requires an authenticated session.
    Private,
}

/// Exact-match route set configuration consulted by the guard.
///
/// The sets intentionally overlap; membership is tested per set. Defaults
/// mirror the application's page routes.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    /// Prefix under which all API endpoints live.
    pub api_prefix: &'static str,
    /// The password-reset form route.
    pub recovery_route: &'static str,
    /// The login form route. Visiting it ends recovery mode.
    pub login_route: &'static str,
    /// The landing page, reachable by anyone.
    pub home_route: &'static str,
    /// Where signed-in users are sent when they hit a logged-out page.
    pub internal_route: &'static str,
    /// Exact paths reachable while logged out.
    pub public_exact: &'static [&'static str],
    /// Path prefixes reachable while logged out (shared-list views).
    pub public_prefixes: &'static [&'static str],
    /// Path prefixes reachable regardless of authentication.
    pub always_accessible_prefixes: &'static [&'static str],
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self {
            api_prefix: "/api",
            recovery_route: "/reset-password",
            login_route: "/login",
            home_route: "/",
            internal_route: "/lists",
            public_exact: &[
                "/login",
                "/register",
                "/forgot-password",
                "/reset-password",
                "/confirmed",
                "/error",
            ],
            public_prefixes: &["/shopping-list"],
            always_accessible_prefixes: &["/shopping-list"],
        }
    }
}

impl RoutePolicy {
    /// True for paths under the API prefix.
    pub fn is_api(&self, path: &str) -> bool {
        path.starts_with(self.api_prefix)
    }

    /// True for the password-reset form.
    pub fn is_recovery_route(&self, path: &str) -> bool {
        path == self.recovery_route
    }

    /// True for the login form.
    pub fn is_login_route(&self, path: &str) -> bool {
        path == self.login_route
    }

    /// True for the landing page.
    pub fn is_home_route(&self, path: &str) -> bool {
        path == self.home_route
    }

    /// True for paths reachable while logged out.
    pub fn is_public_for_logged_out(&self, path: &str) -> bool {
        self.public_exact.contains(&path)
            || self.public_prefixes.iter().any(|p| path.starts_with(p))
    }

    /// True for paths reachable regardless of authentication.
    pub fn is_always_accessible(&self, path: &str) -> bool {
        self.always_accessible_prefixes
            .iter()
            .any(|p| path.starts_with(p))
    }

    /// True for paths that require an authenticated session.
    ///
    /// Everything not explicitly opened up is private.
    pub fn is_private(&self, path: &str) -> bool {
        !self.is_public_for_logged_out(path)
            && !self.is_recovery_route(path)
            && !self.is_home_route(path)
    }

    /// Collapses membership into a single [`RouteClass`] for logging.
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.is_api(path) {
            RouteClass::Api
        } else if self.is_recovery_route(path) {
            RouteClass::Recovery
        } else if self.is_always_accessible(path) {
            RouteClass::AlwaysAccessible
        } else if self.is_public_for_logged_out(path) || self.is_home_route(path) {
            RouteClass::PublicForLoggedOut
        } else {
            RouteClass::Private
        }
    }
}
