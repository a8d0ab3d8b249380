//! The share record and its password digest.
//!
//! A share grants anonymous, link-based access to one list at a fixed
//! permission level. The optional password is digested at creation and
//! compared in constant time; the plaintext is never stored.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::domain::foundation::{ListId, ShareId, Timestamp, UserId, ValidationError};

use super::access::ShareAccess;
use super::errors::ShareError;
use super::permission::SharePermission;

/// SHA-256 digest of a share password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePassword([u8; 32]);

impl SharePassword {
    /// Digests a plaintext password for storage.
    pub fn digest(plaintext: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(plaintext.as_bytes());
        Self(hasher.finalize().into())
    }

    /// Compares a candidate against the stored digest in constant time.
    pub fn verify(&self, candidate: &str) -> bool {
        let candidate = Self::digest(candidate);
        self.0.ct_eq(&candidate.0).into()
    }

    /// Hex form used in the storage column.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Parses the hex storage form back into a digest.
    pub fn from_hex(hex: &str) -> Result<Self, ValidationError> {
        if hex.len() != 64 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValidationError::invalid_format(
                "password_digest",
                "expected 64 hex characters",
            ));
        }
        let mut bytes = [0u8; 32];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            // Unwrap is fine: the characters were just checked.
            let hi = (chunk[0] as char).to_digit(16).unwrap() as u8;
            let lo = (chunk[1] as char).to_digit(16).unwrap() as u8;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

/// A share granting link-based access to one list.
#[derive(Debug, Clone)]
pub struct Share {
    id: ShareId,
    list_id: ListId,
    user_id: UserId,
    permission: SharePermission,
    password: Option<SharePassword>,
    created_at: Timestamp,
}

impl Share {
    /// Creates a new share, digesting the password when one is supplied.
    ///
    /// An empty password is treated as "no password" rather than a
    /// trivially guessable gate.
    pub fn new(
        list_id: ListId,
        user_id: UserId,
        permission: SharePermission,
        password: Option<&str>,
    ) -> Self {
        let password = password
            .filter(|p| !p.is_empty())
            .map(SharePassword::digest);
        Self {
            id: ShareId::new(),
            list_id,
            user_id,
            permission,
            password,
            created_at: Timestamp::now(),
        }
    }

    /// Rehydrates a share from storage.
    pub fn from_parts(
        id: ShareId,
        list_id: ListId,
        user_id: UserId,
        permission: SharePermission,
        password: Option<SharePassword>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            list_id,
            user_id,
            permission,
            password,
            created_at,
        }
    }

    pub fn id(&self) -> &ShareId {
        &self.id
    }

    pub fn list_id(&self) -> &ListId {
        &self.list_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn permission(&self) -> SharePermission {
        self.permission
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// True when the share is password-gated.
    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }

    /// Digest for persistence, if a password is set.
    pub fn password_digest(&self) -> Option<&SharePassword> {
        self.password.as_ref()
    }

    /// First gate step: what an anonymous visitor gets without a password.
    pub fn resolve(&self) -> ShareAccess {
        if self.has_password() {
            ShareAccess::PasswordRequired
        } else {
            ShareAccess::Granted(self.permission)
        }
    }

    /// Second gate step: password submission.
    ///
    /// A share without a password rejects every candidate with the same
    /// error as a mismatch, so the response does not reveal whether a
    /// password is configured.
    pub fn unlock(&self, candidate: &str) -> Result<ShareAccess, ShareError> {
        match &self.password {
            Some(digest) if digest.verify(candidate) => Ok(ShareAccess::Granted(self.permission)),
            _ => Err(ShareError::InvalidPassword),
        }
    }
}
