//! Error types for list reads.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Errors surfaced when reading list content.
#[derive(Debug, Clone, Error)]
pub enum ListError {
    /// The list does not exist.
    #[error("List not found")]
    NotFound,

    /// Underlying storage failure.
    #[error("List storage error: {0}")]
    Database(String),
}

impl ListError {
    /// Creates a database error from an underlying failure.
    pub fn database(message: impl Into<String>) -> Self {
        ListError::Database(message.into())
    }

    /// Stable machine-readable code for HTTP responses.
    pub fn code(&self) -> ErrorCode {
        match self {
            ListError::NotFound => ErrorCode::ListNotFound,
            ListError::Database(_) => ErrorCode::DatabaseError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_list_not_found() {
        assert_eq!(ListError::NotFound.code(), ErrorCode::ListNotFound);
    }

    #[test]
    fn database_error_carries_message() {
        let err = ListError::database("connection refused");
        assert_eq!(format!("{}", err), "List storage error: connection refused");
    }
}
