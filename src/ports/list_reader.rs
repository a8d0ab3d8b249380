//! List content read port for the shared view.

use async_trait::async_trait;

use crate::domain::foundation::{ListId, UserId};
use crate::domain::list::{ListError, SharedListData};

/// Read access to list content.
///
/// Only what the shared view and share administration need; list editing
/// happens against the hosted data store directly.
#[async_trait]
pub trait ListReader: Send + Sync {
    /// The list with its categories and items, ready for the shared view.
    async fn shared_list(&self, list_id: &ListId) -> Result<SharedListData, ListError>;

    /// The owner of a list, or `None` when the list does not exist.
    async fn owner_of(&self, list_id: &ListId) -> Result<Option<UserId>, ListError>;
}
