//! Share gate state machine.

use crate::domain::foundation::StateMachine;

use super::permission::SharePermission;

/// Outcome states of the share gate for one anonymous visitor.
///
/// `NoShareFound` and `Granted` are terminal; `PasswordRequired` stays
/// put on a failed submission and only ever advances to `Granted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareAccess {
    /// No lookup performed yet.
    Unchecked,
    /// The list has no share; content must not be revealed.
    NoShareFound,
    /// A password-gated share exists; content withheld until a match.
    PasswordRequired,
    /// Access granted at the share's permission level.
    Granted(SharePermission),
}

impl ShareAccess {
    /// The granted capability, if any.
    pub fn permission(&self) -> Option<SharePermission> {
        match self {
            ShareAccess::Granted(permission) => Some(*permission),
            _ => None,
        }
    }

    /// True once the gate has granted access.
    pub fn is_granted(&self) -> bool {
        matches!(self, ShareAccess::Granted(_))
    }
}

impl StateMachine for ShareAccess {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ShareAccess::*;
        matches!(
            (self, target),
            (Unchecked, NoShareFound)
                | (Unchecked, PasswordRequired)
                | (Unchecked, Granted(_))
                | (PasswordRequired, Granted(_))
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ShareAccess::*;
        match self {
            Unchecked => vec![
                NoShareFound,
                PasswordRequired,
                Granted(SharePermission::View),
                Granted(SharePermission::Edit),
            ],
            PasswordRequired => vec![
                Granted(SharePermission::View),
                Granted(SharePermission::Edit),
            ],
            NoShareFound | Granted(_) => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchecked_transitions_to_all_lookup_outcomes() {
        let state = ShareAccess::Unchecked;
        assert!(state.can_transition_to(&ShareAccess::NoShareFound));
        assert!(state.can_transition_to(&ShareAccess::PasswordRequired));
        assert!(state.can_transition_to(&ShareAccess::Granted(SharePermission::View)));
    }

    #[test]
    fn password_required_only_advances_to_granted() {
        let state = ShareAccess::PasswordRequired;
        assert!(state.can_transition_to(&ShareAccess::Granted(SharePermission::Edit)));
        assert!(!state.can_transition_to(&ShareAccess::NoShareFound));
        assert!(!state.can_transition_to(&ShareAccess::Unchecked));
    }

    #[test]
    fn no_share_found_is_terminal() {
        assert!(ShareAccess::NoShareFound.is_terminal());
    }

    #[test]
    fn granted_is_terminal() {
        assert!(ShareAccess::Granted(SharePermission::View).is_terminal());
    }

    #[test]
    fn granted_exposes_permission() {
        let access = ShareAccess::Granted(SharePermission::Edit);
        assert!(access.is_granted());
        assert_eq!(access.permission(), Some(SharePermission::Edit));
        assert_eq!(ShareAccess::PasswordRequired.permission(), None);
    }

    #[test]
    fn invalid_transition_is_rejected() {
        let result = ShareAccess::NoShareFound.transition_to(ShareAccess::PasswordRequired);
        assert!(result.is_err());
    }
}
