//! Share administration handlers - owners creating and revoking shares.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{ListId, ShareId, UserId};
use crate::domain::list::ListError;
use crate::domain::share::{Share, ShareError, SharePermission};
use crate::ports::{ListReader, ShareRepository};

/// Errors from share administration.
#[derive(Debug, Clone, Error)]
pub enum ShareAdminError {
    #[error(transparent)]
    Share(#[from] ShareError),

    #[error(transparent)]
    List(#[from] ListError),
}

/// Command to share a list.
#[derive(Debug, Clone)]
pub struct CreateShareCommand {
    pub list_id: ListId,
    pub owner: UserId,
    pub permission: SharePermission,
    pub password: Option<String>,
}

/// Handler creating shares.
///
/// Ownership is verified first; a list that does not exist and a list
/// owned by someone else are indistinguishable to the caller.
pub struct CreateShareHandler {
    shares: Arc<dyn ShareRepository>,
    lists: Arc<dyn ListReader>,
}

impl CreateShareHandler {
    pub fn new(shares: Arc<dyn ShareRepository>, lists: Arc<dyn ListReader>) -> Self {
        Self { shares, lists }
    }

    pub async fn handle(&self, cmd: CreateShareCommand) -> Result<Share, ShareAdminError> {
        verify_ownership(self.lists.as_ref(), &cmd.list_id, &cmd.owner).await?;

        let share = Share::new(
            cmd.list_id,
            cmd.owner,
            cmd.permission,
            cmd.password.as_deref(),
        );
        self.shares.create(&share).await?;

        tracing::debug!(share_id = %share.id(), list_id = %cmd.list_id, "share created");
        Ok(share)
    }
}

/// Handler listing a list's shares for its owner.
pub struct ListSharesHandler {
    shares: Arc<dyn ShareRepository>,
    lists: Arc<dyn ListReader>,
}

impl ListSharesHandler {
    pub fn new(shares: Arc<dyn ShareRepository>, lists: Arc<dyn ListReader>) -> Self {
        Self { shares, lists }
    }

    pub async fn handle(
        &self,
        list_id: ListId,
        owner: &UserId,
    ) -> Result<Vec<Share>, ShareAdminError> {
        verify_ownership(self.lists.as_ref(), &list_id, owner).await?;
        Ok(self.shares.find_all_for_list(&list_id).await?)
    }
}

/// Handler revoking a share.
pub struct DeleteShareHandler {
    shares: Arc<dyn ShareRepository>,
}

impl DeleteShareHandler {
    pub fn new(shares: Arc<dyn ShareRepository>) -> Self {
        Self { shares }
    }

    pub async fn handle(&self, share_id: ShareId, owner: &UserId) -> Result<(), ShareAdminError> {
        self.shares.delete(&share_id, owner).await?;
        tracing::debug!(%share_id, "share revoked");
        Ok(())
    }
}

async fn verify_ownership(
    lists: &dyn ListReader,
    list_id: &ListId,
    owner: &UserId,
) -> Result<(), ShareAdminError> {
    match lists.owner_of(list_id).await? {
        Some(actual) if &actual == owner => Ok(()),
        _ => Err(ListError::NotFound.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::list::{List, SharedListData};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockShareRepository {
        shares: Mutex<Vec<Share>>,
    }

    impl MockShareRepository {
        fn empty() -> Arc<Self> {
            Arc::new(Self {
                shares: Mutex::new(Vec::new()),
            })
        }

        fn stored(&self) -> Vec<Share> {
            self.shares.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ShareRepository for MockShareRepository {
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

    struct MockListReader {
        list: List,
    }

    impl MockListReader {
        fn owned_by(list_id: ListId, owner: &UserId) -> Arc<Self> {
            Arc::new(Self {
                list: List {
                    id: list_id,
                    user_id: owner.clone(),
                    name: "Lista".to_string(),
                    description: None,
                    month: 1,
                    year: 2025,
                    created_at: Timestamp::now(),
                },
            })
        }
    }

    #[async_trait]
    impl ListReader for MockListReader {
        async fn shared_list(&self, _list_id: &ListId) -> Result<SharedListData, ListError> {
            Ok(SharedListData {
                list: self.list.clone(),
                categories: vec![],
                items: vec![],
            })
        }

        async fn owner_of(&self, list_id: &ListId) -> Result<Option<UserId>, ListError> {
            Ok((list_id == &self.list.id).then(|| self.list.user_id.clone()))
        }
    }

    fn owner() -> UserId {
        UserId::new("owner-1").unwrap()
    }

    #[tokio::test]
    async fn create_share_digests_password() {
        let list_id = ListId::new();
        let repo = MockShareRepository::empty();
        let handler =
            CreateShareHandler::new(repo.clone(), MockListReader::owned_by(list_id, &owner()));

        let share = handler
            .handle(CreateShareCommand {
                list_id,
                owner: owner(),
                permission: SharePermission::Edit,
                password: Some("xyz".to_string()),
            })
            .await
            .unwrap();

        assert!(share.has_password());
        let stored = repo.stored();
        assert_eq!(stored.len(), 1);
        // The digest must verify the plaintext without storing it.
        assert_ne!(stored[0].password_digest().unwrap().to_hex(), "xyz");
        assert!(stored[0].unlock("xyz").is_ok());
    }

    #[tokio::test]
    async fn create_second_share_is_refused() {
        let list_id = ListId::new();
        let repo = MockShareRepository::empty();
        let handler = CreateShareHandler::new(repo, MockListReader::owned_by(list_id, &owner()));

        let cmd = CreateShareCommand {
            list_id,
            owner: owner(),
            permission: SharePermission::View,
            password: None,
        };
        handler.handle(cmd.clone()).await.unwrap();
        let result = handler.handle(cmd).await;

        assert!(matches!(
            result,
            Err(ShareAdminError::Share(ShareError::AlreadyShared))
        ));
    }

    #[tokio::test]
    async fn non_owner_sees_not_found() {
        let list_id = ListId::new();
        let handler = CreateShareHandler::new(
            MockShareRepository::empty(),
            MockListReader::owned_by(list_id, &owner()),
        );

        let result = handler
            .handle(CreateShareCommand {
                list_id,
                owner: UserId::new("stranger").unwrap(),
                permission: SharePermission::View,
                password: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(ShareAdminError::List(ListError::NotFound))
        ));
    }

    #[tokio::test]
    async fn list_shares_returns_owner_records() {
        let list_id = ListId::new();
        let repo = MockShareRepository::empty();
        let reader = MockListReader::owned_by(list_id, &owner());
        let create = CreateShareHandler::new(repo.clone(), reader.clone());
        create
            .handle(CreateShareCommand {
                list_id,
                owner: owner(),
                permission: SharePermission::View,
                password: None,
            })
            .await
            .unwrap();

        let handler = ListSharesHandler::new(repo, reader);
        let shares = handler.handle(list_id, &owner()).await.unwrap();
        assert_eq!(shares.len(), 1);
    }

    #[tokio::test]
    async fn delete_unknown_share_is_not_found() {
        let handler = DeleteShareHandler::new(MockShareRepository::empty());

        let result = handler.handle(ShareId::new(), &owner()).await;
        assert!(matches!(
            result,
            Err(ShareAdminError::Share(ShareError::NotFound))
        ));
    }
}
