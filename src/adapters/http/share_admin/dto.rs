//! Request/response DTOs for share administration.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::share::{Share, SharePermission};

/// POST /api/lists/:id/shares request body.
#[derive(Debug, Deserialize)]
pub struct CreateShareRequest {
    pub permission: SharePermission,
    #[serde(default)]
    pub password: Option<String>,
}

/// One share as the owner sees it. The password digest never leaves the
/// server.
#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub id: String,
    pub list_id: String,
    pub permission: SharePermission,
    pub has_password: bool,
    pub created_at: Timestamp,
    /// Path of the public view this share unlocks.
    pub link_path: String,
}

impl ShareResponse {
    pub fn from_share(share: &Share) -> Self {
        Self {
            id: share.id().to_string(),
            list_id: share.list_id().to_string(),
            permission: share.permission(),
            has_password: share.has_password(),
            created_at: *share.created_at(),
            link_path: format!("/shopping-list/{}", share.list_id()),
        }
    }
}

/// GET /api/lists/:id/shares response body.
#[derive(Debug, Serialize)]
pub struct ShareListResponse {
    pub shares: Vec<ShareResponse>,
}
