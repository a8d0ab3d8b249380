//! Share gate handlers - anonymous access to a shared list.
//!
//! Two steps, each one outstanding request from the visitor: resolve the
//! share for a list, then (when gated) submit the password. Content is
//! loaded only after the gate grants access.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::ListId;
use crate::domain::list::{ListError, SharedListData};
use crate::domain::share::{ShareAccess, ShareError, SharePermission};
use crate::ports::{ListReader, ShareRepository};

/// Errors from the share gate flow.
#[derive(Debug, Clone, Error)]
pub enum ShareGateError {
    #[error(transparent)]
    Share(#[from] ShareError),

    #[error(transparent)]
    List(#[from] ListError),
}

/// What the gate yields to the visitor.
#[derive(Debug, Clone)]
pub enum ShareView {
    /// A password-gated share exists; no content yet.
    PasswordRequired,
    /// Access granted; content and capability attached.
    Granted {
        permission: SharePermission,
        data: SharedListData,
    },
}

/// Handler for the first gate step: share lookup.
pub struct ResolveShareHandler {
    shares: Arc<dyn ShareRepository>,
    lists: Arc<dyn ListReader>,
}

impl ResolveShareHandler {
    pub fn new(shares: Arc<dyn ShareRepository>, lists: Arc<dyn ListReader>) -> Self {
        Self { shares, lists }
    }

    /// Looks up the share for `list_id` and, when it grants access
    /// without a password, loads the list content.
    pub async fn handle(&self, list_id: ListId) -> Result<ShareView, ShareGateError> {
        let share = self
            .shares
            .find_for_list(&list_id)
            .await?
            .ok_or(ShareError::NotAvailable)?;

        match share.resolve() {
            ShareAccess::PasswordRequired => Ok(ShareView::PasswordRequired),
            ShareAccess::Granted(permission) => {
                let data = self.lists.shared_list(&list_id).await?;
                Ok(ShareView::Granted { permission, data })
            }
            // resolve() only produces the two states above; fail closed.
            other => {
                tracing::error!(?other, "unexpected share resolution state");
                Err(ShareError::NotAvailable.into())
            }
        }
    }
}

/// Handler for the second gate step: password submission.
pub struct SubmitPasswordHandler {
    shares: Arc<dyn ShareRepository>,
    lists: Arc<dyn ListReader>,
}

impl SubmitPasswordHandler {
    pub fn new(shares: Arc<dyn ShareRepository>, lists: Arc<dyn ListReader>) -> Self {
        Self { shares, lists }
    }

    /// Verifies the candidate password and loads the list on a match.
    ///
    /// A mismatch leaves the visitor in the password-required state with
    /// a retryable error; there is no attempt limit.
    pub async fn handle(
        &self,
        list_id: ListId,
        candidate: &str,
    ) -> Result<ShareView, ShareGateError> {
        let share = self
            .shares
            .find_for_list(&list_id)
            .await?
            .ok_or(ShareError::NotAvailable)?;

        let access = share.unlock(candidate)?;
        match access.permission() {
            Some(permission) => {
                let data = self.lists.shared_list(&list_id).await?;
                Ok(ShareView::Granted { permission, data })
            }
            None => Err(ShareError::InvalidPassword.into()),
        }
    }
}
