//! Error types for the share module.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Errors surfaced by the share gate and share administration.
#[derive(Debug, Clone, Error)]
pub enum ShareError {
    /// No share exists for the list. Terminal for anonymous visitors;
    /// content must not be revealed.
    #[error("This list is not available for public access")]
    NotAvailable,

    /// The submitted password did not match. Retryable. Also returned
    /// when the share has no password at all, so probing cannot reveal
    /// share configuration.
    #[error("Invalid password")]
    InvalidPassword,

    /// A share already exists for the list; at most one is allowed.
    #[error("This list is already shared")]
    AlreadyShared,

    /// The share record does not exist (or does not belong to the caller).
    #[error("Share not found")]
    NotFound,

    /// Underlying storage failure.
    #[error("Share storage error: {0}")]
    Database(String),
}

impl ShareError {
    /// Creates a database error from an underlying failure.
    pub fn database(message: impl Into<String>) -> Self {
        ShareError::Database(message.into())
    }

    /// Stable machine-readable code for HTTP responses.
    pub fn code(&self) -> ErrorCode {
        match self {
            ShareError::NotAvailable => ErrorCode::ShareNotFound,
            ShareError::InvalidPassword => ErrorCode::InvalidSharePassword,
            ShareError::AlreadyShared => ErrorCode::ShareAlreadyExists,
            ShareError::NotFound => ErrorCode::ShareNotFound,
            ShareError::Database(_) => ErrorCode::DatabaseError,
        }
    }

    /// True when the caller may retry with different input.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ShareError::InvalidPassword)
    }
}
