//! Access guard configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::access::RECOVERY_TTL_SECS;

/// Access guard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AccessConfig {
    /// Lifetime of the recovery cookie in seconds
    #[serde(default = "default_recovery_ttl")]
    pub recovery_ttl_secs: u64,
}

impl AccessConfig {
    /// Get recovery TTL as Duration
    pub fn recovery_ttl(&self) -> Duration {
        Duration::from_secs(self.recovery_ttl_secs)
    }

    /// Validate access configuration
    ///
    /// The recovery window must be short: a day-long flag would let an
    /// abandoned reset link pin the account to the reset form.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.recovery_ttl_secs == 0 || self.recovery_ttl_secs > 86_400 {
            return Err(ValidationError::InvalidRecoveryTtl);
        }
        Ok(())
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            recovery_ttl_secs: default_recovery_ttl(),
        }
    }
}

fn default_recovery_ttl() -> u64 {
    RECOVERY_TTL_SECS
}
