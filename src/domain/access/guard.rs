//! Access guard - the per-request allow/redirect decision.
//!
//! The guard composes the route policy, the caller's session, and the
//! recovery flag into a terminal decision. It is a pure function: every
//! branch ends in an explicit allow or redirect, never an error, and the
//! only side effects are cookie directives carried on the decision.
//!
//! Rule order matters. Recovery-mode confinement (rules 2-4) takes
//! precedence over normal public/private routing (rules 5-6): a user mid
//! password-reset must not be able to navigate away and leave the flow in
//! an inconsistent state.

use super::recovery::RecoveryFlag;
use super::route::RoutePolicy;

/// Everything the guard needs to know about one request.
#[derive(Debug, Clone)]
pub struct GuardInput<'a> {
    /// Request path, already percent-decoded by the framework.
    pub path: &'a str,
    /// Whether the request carries the reset-email marker
    /// (`type=recovery` in the query string).
    pub is_recovery_link: bool,
    /// Whether the session resolver produced an identity.
    pub authenticated: bool,
    /// Recovery flag parsed from the request cookies.
    pub recovery: RecoveryFlag,
}

/// Cookie mutation attached to an allow decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieEffect {
    /// Mint the recovery cookie with its fixed TTL.
    SetRecovery,
    /// Delete the recovery cookie.
    ClearRecovery,
}

/// Where a redirect decision sends the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// The login form.
    Login,
    /// The password-reset form.
    Recovery,
    /// The signed-in landing page.
    Internal,
}

impl RedirectTarget {
    /// Resolves the target to a concrete path under the given policy.
    pub fn path(&self, policy: &RoutePolicy) -> &'static str {
        match self {
            RedirectTarget::Login => policy.login_route,
            RedirectTarget::Recovery => policy.recovery_route,
            RedirectTarget::Internal => policy.internal_route,
        }
    }
}

/// Terminal outcome of the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the request through, optionally mutating the recovery cookie.
    Allow { cookie: Option<CookieEffect> },
    /// Send the caller elsewhere.
    Redirect { target: RedirectTarget },
}

impl GuardDecision {
    fn allow() -> Self {
        GuardDecision::Allow { cookie: None }
    }

    fn allow_with(effect: CookieEffect) -> Self {
        GuardDecision::Allow {
            cookie: Some(effect),
        }
    }

    fn redirect(target: RedirectTarget) -> Self {
        GuardDecision::Redirect { target }
    }
}

/// Decides whether a request may proceed.
///
/// Rules are evaluated in order; the first match wins. Later rules assume
/// earlier ones did not already terminate.
pub fn decide(policy: &RoutePolicy, input: &GuardInput<'_>) -> GuardDecision {
    let path = input.path;

    // 1. API routes bypass the guard entirely.
    if policy.is_api(path) {
        return GuardDecision::allow();
    }

    // 2. Arriving from a reset email: let the visitor onto the reset form
    //    and mint the recovery flag. The only rule that both allows and
    //    mutates state.
    if policy.is_recovery_route(path) && input.is_recovery_link && input.recovery.is_absent() {
        return GuardDecision::allow_with(CookieEffect::SetRecovery);
    }

    // 3. Direct navigation to the reset form without the flag is blocked.
    if policy.is_recovery_route(path) && input.recovery.is_absent() {
        return GuardDecision::redirect(RedirectTarget::Login);
    }

    // 4. A signed-in session mid-recovery is pinned to the reset flow;
    //    only the reset form and the login page remain reachable.
    if input.authenticated
        && input.recovery.is_present()
        && !policy.is_recovery_route(path)
        && !policy.is_login_route(path)
    {
        return GuardDecision::redirect(RedirectTarget::Recovery);
    }

    // 5. Signed-in users are pushed off logged-out pages (login, register,
    //    ...) toward the list view, except pages that stay reachable for
    //    everyone.
    if input.authenticated
        && input.recovery.is_absent()
        && policy.is_public_for_logged_out(path)
        && !policy.is_always_accessible(path)
    {
        return GuardDecision::redirect(RedirectTarget::Internal);
    }

    // 6. Anonymous visitors cannot reach private routes.
    if !input.authenticated && policy.is_private(path) {
        return GuardDecision::redirect(RedirectTarget::Login);
    }

    // 7. Returning to login while flagged ends recovery mode.
    if policy.is_login_route(path) && input.recovery.is_present() {
        return GuardDecision::allow_with(CookieEffect::ClearRecovery);
    }

    // 8. Everything else passes through unchanged.
    GuardDecision::allow()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(path: &str) -> GuardInput<'_> {
        GuardInput {
            path,
            is_recovery_link: false,
            authenticated: false,
            recovery: RecoveryFlag::Absent,
        }
    }

    fn policy() -> RoutePolicy {
        RoutePolicy::default()
    }

    // ════════════════════════════════════════════════════════════════════
    // Rule 1 - API pass-through
    // ════════════════════════════════════════════════════════════════════

    #[test]
    fn api_paths_allow_unconditionally() {
        let policy = policy();
        for (authenticated, recovery, link) in [
            (false, RecoveryFlag::Absent, false),
            (true, RecoveryFlag::Absent, false),
            (false, RecoveryFlag::Present, true),
            (true, RecoveryFlag::Present, true),
        ] {
            let decision = decide(
                &policy,
                &GuardInput {
                    path: "/api/clear-recovery-cookie",
                    is_recovery_link: link,
                    authenticated,
                    recovery,
                },
            );
            assert_eq!(decision, GuardDecision::Allow { cookie: None });
        }
    }

    // ════════════════════════════════════════════════════════════════════
    // Rules 2-3 - entering the reset form
    // ════════════════════════════════════════════════════════════════════

    #[test]
    fn recovery_link_allows_and_sets_flag() {
        let decision = decide(
            &policy(),
            &GuardInput {
                is_recovery_link: true,
                ..input("/reset-password")
            },
        );
        assert_eq!(
            decision,
            GuardDecision::Allow {
                cookie: Some(CookieEffect::SetRecovery)
            }
        );
    }

    #[test]
    fn recovery_link_with_existing_flag_does_not_remint() {
        let decision = decide(
            &policy(),
            &GuardInput {
                is_recovery_link: true,
                recovery: RecoveryFlag::Present,
                ..input("/reset-password")
            },
        );
        // Flag already set: rule 2 skipped, rule 3 skipped, plain allow.
        assert_eq!(decision, GuardDecision::Allow { cookie: None });
    }

    #[test]
    fn direct_navigation_to_reset_form_redirects_to_login() {
        let decision = decide(&policy(), &input("/reset-password"));
        assert_eq!(
            decision,
            GuardDecision::Redirect {
                target: RedirectTarget::Login
            }
        );
    }

    #[test]
    fn reset_form_with_flag_is_reachable() {
        let decision = decide(
            &policy(),
            &GuardInput {
                recovery: RecoveryFlag::Present,
                ..input("/reset-password")
            },
        );
        assert_eq!(decision, GuardDecision::Allow { cookie: None });
    }

    // ════════════════════════════════════════════════════════════════════
    // Rule 4 - recovery confinement
    // ════════════════════════════════════════════════════════════════════

    #[test]
    fn signed_in_recovery_session_is_pinned_to_reset_flow() {
        let policy = policy();
        for path in ["/lists", "/categories", "/profile", "/", "/register", "/shopping-list/x"] {
            let decision = decide(
                &policy,
                &GuardInput {
                    authenticated: true,
                    recovery: RecoveryFlag::Present,
                    ..input(path)
                },
            );
            assert_eq!(
                decision,
                GuardDecision::Redirect {
                    target: RedirectTarget::Recovery
                },
                "{path}"
            );
        }
    }

    #[test]
    fn signed_in_recovery_session_may_reach_login_and_reset() {
        let policy = policy();
        let reset = decide(
            &policy,
            &GuardInput {
                authenticated: true,
                recovery: RecoveryFlag::Present,
                ..input("/reset-password")
            },
        );
        assert_eq!(reset, GuardDecision::Allow { cookie: None });

        let login = decide(
            &policy,
            &GuardInput {
                authenticated: true,
                recovery: RecoveryFlag::Present,
                ..input("/login")
            },
        );
        assert_eq!(
            login,
            GuardDecision::Allow {
                cookie: Some(CookieEffect::ClearRecovery)
            }
        );
    }

    // ════════════════════════════════════════════════════════════════════
    // Rule 5 - signed-in users bounce off logged-out pages
    // ════════════════════════════════════════════════════════════════════

    #[test]
    fn signed_in_user_on_login_redirects_to_lists() {
        let decision = decide(
            &policy(),
            &GuardInput {
                authenticated: true,
                ..input("/login")
            },
        );
        assert_eq!(
            decision,
            GuardDecision::Redirect {
                target: RedirectTarget::Internal
            }
        );
    }

    #[test]
    fn signed_in_user_may_view_shared_list() {
        let decision = decide(
            &policy(),
            &GuardInput {
                authenticated: true,
                ..input("/shopping-list/0a1b2c")
            },
        );
        assert_eq!(decision, GuardDecision::Allow { cookie: None });
    }

    #[test]
    fn signed_in_user_reaches_private_routes() {
        let decision = decide(
            &policy(),
            &GuardInput {
                authenticated: true,
                ..input("/lists")
            },
        );
        assert_eq!(decision, GuardDecision::Allow { cookie: None });
    }

    // ════════════════════════════════════════════════════════════════════
    // Rule 6 - anonymous visitors bounce off private routes
    // ════════════════════════════════════════════════════════════════════

    #[test]
    fn anonymous_visitor_on_private_route_redirects_to_login() {
        let policy = policy();
        for path in ["/lists", "/lists/42", "/categories", "/profile"] {
            let decision = decide(&policy, &input(path));
            assert_eq!(
                decision,
                GuardDecision::Redirect {
                    target: RedirectTarget::Login
                },
                "{path}"
            );
        }
    }

    #[test]
    fn anonymous_visitor_reaches_public_routes() {
        let policy = policy();
        for path in ["/login", "/register", "/", "/shopping-list/0a1b2c", "/forgot-password"] {
            let decision = decide(&policy, &input(path));
            assert_eq!(decision, GuardDecision::Allow { cookie: None }, "{path}");
        }
    }

    // ════════════════════════════════════════════════════════════════════
    // Rule 7 - login clears the flag
    // ════════════════════════════════════════════════════════════════════

    #[test]
    fn anonymous_login_visit_clears_stale_flag() {
        let decision = decide(
            &policy(),
            &GuardInput {
                recovery: RecoveryFlag::Present,
                ..input("/login")
            },
        );
        assert_eq!(
            decision,
            GuardDecision::Allow {
                cookie: Some(CookieEffect::ClearRecovery)
            }
        );
    }

    #[test]
    fn anonymous_recovery_session_keeps_flag_elsewhere() {
        // Rule 4 requires a session; an anonymous visitor with a stale
        // flag is governed by the ordinary public/private rules.
        let decision = decide(
            &policy(),
            &GuardInput {
                recovery: RecoveryFlag::Present,
                ..input("/")
            },
        );
        assert_eq!(decision, GuardDecision::Allow { cookie: None });
    }

    // ════════════════════════════════════════════════════════════════════
    // Redirect targets
    // ════════════════════════════════════════════════════════════════════

    #[test]
    fn redirect_targets_resolve_to_policy_paths() {
        let policy = policy();
        assert_eq!(RedirectTarget::Login.path(&policy), "/login");
        assert_eq!(RedirectTarget::Recovery.path(&policy), "/reset-password");
        assert_eq!(RedirectTarget::Internal.path(&policy), "/lists");
    }
}
