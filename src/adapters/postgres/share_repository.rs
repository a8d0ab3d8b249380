//! PostgreSQL implementation of ShareRepository.
//!
//! Table names and columns match the hosted schema the web client talks
//! to ("Share", camelCase columns). The single-share-per-list rule is
//! backed by a unique index on "Share"("listId"); the insert surfaces its
//! violation as `AlreadyShared`.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{ListId, ShareId, Timestamp, UserId};
use crate::domain::share::{Share, ShareError, SharePassword, SharePermission};
use crate::ports::ShareRepository;

/// Postgres error code for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL implementation of ShareRepository.
#[derive(Clone)]
pub struct PostgresShareRepository {
    pool: PgPool,
}

impl PostgresShareRepository {
    /// Creates a new PostgresShareRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShareRepository for PostgresShareRepository {
    async fn find_for_list(&self, list_id: &ListId) -> Result<Option<Share>, ShareError> {
        let row = sqlx::query(
            r#"
            SELECT id, "listId", "userId", permission, password, "createdAt"
            FROM "Share"
            WHERE "listId" = $1
            ORDER BY "createdAt" ASC
            LIMIT 1
            "#,
        )
        .bind(list_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ShareError::database(format!("Failed to fetch share: {}", e)))?;

        row.map(row_to_share).transpose()
    }

    async fn find_all_for_list(&self, list_id: &ListId) -> Result<Vec<Share>, ShareError> {
        let rows = sqlx::query(
            r#"
            SELECT id, "listId", "userId", permission, password, "createdAt"
            FROM "Share"
            WHERE "listId" = $1
            ORDER BY "createdAt" ASC
            "#,
        )
        .bind(list_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ShareError::database(format!("Failed to fetch shares: {}", e)))?;

        rows.into_iter().map(row_to_share).collect()
    }

    async fn create(&self, share: &Share) -> Result<(), ShareError> {
        sqlx::query(
            r#"
            INSERT INTO "Share" (
                id, "listId", "userId", permission, "hasPassword", password, "createdAt"
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(share.id().as_uuid())
        .bind(share.list_id().as_uuid())
        .bind(share.user_id().as_str())
        .bind(share.permission().as_str())
        .bind(share.has_password())
        .bind(share.password_digest().map(|d| d.to_hex()))
        .bind(share.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                ShareError::AlreadyShared
            }
            _ => ShareError::database(format!("Failed to insert share: {}", e)),
        })?;

        Ok(())
    }

    async fn delete(&self, share_id: &ShareId, owner: &UserId) -> Result<(), ShareError> {
        let result = sqlx::query(
            r#"
            DELETE FROM "Share"
            WHERE id = $1 AND "userId" = $2
            "#,
        )
        .bind(share_id.as_uuid())
        .bind(owner.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| ShareError::database(format!("Failed to delete share: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(ShareError::NotFound);
        }

        Ok(())
    }
}

fn row_to_share(row: sqlx::postgres::PgRow) -> Result<Share, ShareError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| ShareError::database(format!("Bad share row: {}", e)))?;
    let list_id: Uuid = row
        .try_get("listId")
        .map_err(|e| ShareError::database(format!("Bad share row: {}", e)))?;
    let user_id: String = row
        .try_get("userId")
        .map_err(|e| ShareError::database(format!("Bad share row: {}", e)))?;
    let permission: String = row
        .try_get("permission")
        .map_err(|e| ShareError::database(format!("Bad share row: {}", e)))?;
    let password: Option<String> = row
        .try_get("password")
        .map_err(|e| ShareError::database(format!("Bad share row: {}", e)))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("createdAt")
        .map_err(|e| ShareError::database(format!("Bad share row: {}", e)))?;

    let permission: SharePermission = permission
        .parse()
        .map_err(|e| ShareError::database(format!("Bad permission value: {}", e)))?;
    let password = password
        .map(|hex| SharePassword::from_hex(&hex))
        .transpose()
        .map_err(|e| ShareError::database(format!("Bad password digest: {}", e)))?;
    let user_id =
        UserId::new(user_id).map_err(|e| ShareError::database(format!("Bad owner id: {}", e)))?;

    Ok(Share::from_parts(
        ShareId::from_uuid(id),
        ListId::from_uuid(list_id),
        user_id,
        permission,
        password,
        Timestamp::from_datetime(created_at),
    ))
}
