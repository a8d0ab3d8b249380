//! Permission level granted by a share.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Capability a share grants to anonymous visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePermission {
    /// Read-only access; purchase toggles and edits stay disabled.
    View,
    /// Visitors may toggle the purchased state of items.
    Edit,
}

impl SharePermission {
    /// True when the capability allows mutating item state.
    pub fn can_edit(&self) -> bool {
        matches!(self, SharePermission::Edit)
    }

    /// True when the shared view must render read-only.
    pub fn is_read_only(&self) -> bool {
        !self.can_edit()
    }

    /// Stable string form used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            SharePermission::View => "view",
            SharePermission::Edit => "edit",
        }
    }
}

impl fmt::Display for SharePermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SharePermission {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(SharePermission::View),
            "edit" => Ok(SharePermission::Edit),
            other => Err(ValidationError::invalid_format(
                "permission",
                format!("expected 'view' or 'edit', got '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_is_read_only() {
        assert!(SharePermission::View.is_read_only());
        assert!(!SharePermission::View.can_edit());
    }

    #[test]
    fn edit_allows_mutation() {
        assert!(SharePermission::Edit.can_edit());
        assert!(!SharePermission::Edit.is_read_only());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SharePermission::View).unwrap(), "\"view\"");
        assert_eq!(serde_json::to_string(&SharePermission::Edit).unwrap(), "\"edit\"");
    }

    #[test]
    fn parses_from_storage_form() {
        assert_eq!("view".parse::<SharePermission>().unwrap(), SharePermission::View);
        assert_eq!("edit".parse::<SharePermission>().unwrap(), SharePermission::Edit);
        assert!("admin".parse::<SharePermission>().is_err());
    }

    #[test]
    fn display_matches_storage_form() {
        assert_eq!(SharePermission::Edit.to_string(), "edit");
    }
}
