//! Request/response DTOs for the recovery endpoints.

use serde::{Deserialize, Serialize};

/// POST /api/reset-password request body.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: String,
}

/// JSON acknowledgement body.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub message: String,
}

impl AckResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
