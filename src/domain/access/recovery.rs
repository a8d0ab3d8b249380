//! Recovery-mode flag carried in a browser cookie.
//!
//! The flag marks a browser session as mid password-reset. It is a
//! two-state machine persisted in the `IsRecovery` cookie: the wire value
//! is `"true"` or absent, and the one-hour lifetime is enforced through
//! the cookie's Max-Age minted on the set path. Only the owning session
//! ever sets or clears its flag, so last-write-wins is sufficient.

/// Cookie name carrying the recovery flag.
pub const RECOVERY_COOKIE_NAME: &str = "IsRecovery";

/// Wire value marking the flag as present.
pub const RECOVERY_COOKIE_VALUE: &str = "true";

/// Lifetime of the flag in seconds. After this the browser drops the
/// cookie and the session is treated as never having entered recovery.
pub const RECOVERY_TTL_SECS: u64 = 3600;

/// Whether the current browser session is mid password-reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryFlag {
    /// No recovery in progress (or the cookie's TTL lapsed).
    #[default]
    Absent,
    /// The session arrived from a reset email and is confined to the
    /// reset flow.
    Present,
}

impl RecoveryFlag {
    /// Parses the flag from the raw cookie value, if any.
    ///
    /// Anything other than the exact marker value counts as absent.
    pub fn from_cookie_value(value: Option<&str>) -> Self {
        match value {
            Some(RECOVERY_COOKIE_VALUE) => RecoveryFlag::Present,
            _ => RecoveryFlag::Absent,
        }
    }

    /// Serializes the flag back to a cookie value.
    ///
    /// `None` means the cookie should not exist (cleared / max-age 0).
    pub fn as_cookie_value(&self) -> Option<&'static str> {
        match self {
            RecoveryFlag::Present => Some(RECOVERY_COOKIE_VALUE),
            RecoveryFlag::Absent => None,
        }
    }

    /// True when the session is mid password-reset.
    pub fn is_present(&self) -> bool {
        matches!(self, RecoveryFlag::Present)
    }

    /// True when no recovery is in progress.
    pub fn is_absent(&self) -> bool {
        matches!(self, RecoveryFlag::Absent)
    }

    /// Marks the session as in recovery. Idempotent.
    pub fn mark(self) -> Self {
        RecoveryFlag::Present
    }

    /// Clears the flag. Idempotent.
    pub fn clear(self) -> Self {
        RecoveryFlag::Absent
    }
}
