//! Share persistence port.

use async_trait::async_trait;

use crate::domain::foundation::{ListId, ShareId, UserId};
use crate::domain::share::{Share, ShareError};

/// Persistence operations for share records.
///
/// # Contract
///
/// At most one share exists per list; `create` must refuse a second one
/// with [`ShareError::AlreadyShared`]. `find_for_list` still returns the
/// first record by creation time if legacy data holds several.
#[async_trait]
pub trait ShareRepository: Send + Sync {
    /// The share consulted by the gate for a list, if any.
    async fn find_for_list(&self, list_id: &ListId) -> Result<Option<Share>, ShareError>;

    /// All shares of a list, for the owner's management view.
    async fn find_all_for_list(&self, list_id: &ListId) -> Result<Vec<Share>, ShareError>;

    /// Persists a new share. Fails with `AlreadyShared` when the list
    /// already has one.
    async fn create(&self, share: &Share) -> Result<(), ShareError>;

    /// Deletes a share owned by `owner`. Fails with `NotFound` when the
    /// share does not exist or belongs to someone else, so callers cannot
    /// probe other users' shares.
    async fn delete(&self, share_id: &ShareId, owner: &UserId) -> Result<(), ShareError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::share::SharePermission;
    use std::sync::Mutex;

    /// In-memory implementation exercising the uniqueness contract.
    struct TestShareRepository {
        shares: Mutex<Vec<Share>>,
    }

    #[async_trait]
    impl ShareRepository for TestShareRepository {
        async fn find_for_list(&self, list_id: &ListId) -> Result<Option<Share>, ShareError> {
            Ok(self
                .shares
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.list_id() == list_id)
                .cloned())
        }

        async fn find_all_for_list(&self, list_id: &ListId) -> Result<Vec<Share>, ShareError> {
            Ok(self
                .shares
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.list_id() == list_id)
                .cloned()
                .collect())
        }

        async fn create(&self, share: &Share) -> Result<(), ShareError> {
            let mut shares = self.shares.lock().unwrap();
            if shares.iter().any(|s| s.list_id() == share.list_id()) {
                return Err(ShareError::AlreadyShared);
            }
            shares.push(share.clone());
            Ok(())
        }

        async fn delete(&self, share_id: &ShareId, owner: &UserId) -> Result<(), ShareError> {
            let mut shares = self.shares.lock().unwrap();
            let position = shares
                .iter()
                .position(|s| s.id() == share_id && s.user_id() == owner)
                .ok_or(ShareError::NotFound)?;
            shares.remove(position);
            Ok(())
        }
    }

    fn repository() -> TestShareRepository {
        TestShareRepository {
            shares: Mutex::new(Vec::new()),
        }
    }

    fn owner() -> UserId {
        UserId::new("owner-1").unwrap()
    }

    #[tokio::test]
    async fn create_then_find_roundtrips() {
        let repo = repository();
        let list_id = ListId::new();
        let share = Share::new(list_id, owner(), SharePermission::View, None);

        repo.create(&share).await.unwrap();
        let found = repo.find_for_list(&list_id).await.unwrap();
        assert_eq!(found.unwrap().id(), share.id());
    }

    #[tokio::test]
    async fn second_share_for_list_is_refused() {
        let repo = repository();
        let list_id = ListId::new();
        repo.create(&Share::new(list_id, owner(), SharePermission::View, None))
            .await
            .unwrap();

        let result = repo
            .create(&Share::new(list_id, owner(), SharePermission::Edit, None))
            .await;
        assert!(matches!(result, Err(ShareError::AlreadyShared)));
    }

    #[tokio::test]
    async fn delete_requires_ownership() {
        let repo = repository();
        let share = Share::new(ListId::new(), owner(), SharePermission::View, None);
        repo.create(&share).await.unwrap();

        let stranger = UserId::new("stranger").unwrap();
        let result = repo.delete(share.id(), &stranger).await;
        assert!(matches!(result, Err(ShareError::NotFound)));

        repo.delete(share.id(), &owner()).await.unwrap();
    }
}
