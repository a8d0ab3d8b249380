//! PostgreSQL implementation of ListReader.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{CategoryId, ItemId, ListId, Timestamp, UserId};
use crate::domain::list::{Category, Item, List, ListError, SharedListData};
use crate::ports::ListReader;

/// PostgreSQL implementation of ListReader.
#[derive(Clone)]
pub struct PostgresListReader {
    pool: PgPool,
}

impl PostgresListReader {
    /// Creates a new PostgresListReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_list(&self, list_id: &ListId) -> Result<List, ListError> {
        let row = sqlx::query(
            r#"
            SELECT id, "userId", name, description, month, year, "createdAt"
            FROM "List"
            WHERE id = $1
            "#,
        )
        .bind(list_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ListError::database(format!("Failed to fetch list: {}", e)))?
        .ok_or(ListError::NotFound)?;

        let id: Uuid = get(&row, "id")?;
        let user_id: String = get(&row, "userId")?;
        let created_at: chrono::DateTime<chrono::Utc> = get(&row, "createdAt")?;

        Ok(List {
            id: ListId::from_uuid(id),
            user_id: UserId::new(user_id)
                .map_err(|e| ListError::database(format!("Bad owner id: {}", e)))?,
            name: get(&row, "name")?,
            description: get(&row, "description")?,
            month: get(&row, "month")?,
            year: get(&row, "year")?,
            created_at: Timestamp::from_datetime(created_at),
        })
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, ListError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, color, position
            FROM "Category"
            ORDER BY position ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ListError::database(format!("Failed to fetch categories: {}", e)))?;

        rows.into_iter()
            .map(|row| {
                let id: Uuid = get(&row, "id")?;
                Ok(Category {
                    id: CategoryId::from_uuid(id),
                    name: get(&row, "name")?,
                    color: get(&row, "color")?,
                    position: get(&row, "position")?,
                })
            })
            .collect()
    }

    async fn fetch_items(&self, list_id: &ListId) -> Result<Vec<Item>, ListError> {
        let rows = sqlx::query(
            r#"
            SELECT id, "listId", "categoryId", name, quantity, "imageUrl", purchased, position
            FROM "Item"
            WHERE "listId" = $1
            ORDER BY position ASC
            "#,
        )
        .bind(list_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ListError::database(format!("Failed to fetch items: {}", e)))?;

        rows.into_iter()
            .map(|row| {
                let id: Uuid = get(&row, "id")?;
                let list_id: Uuid = get(&row, "listId")?;
                let category_id: Option<Uuid> = get(&row, "categoryId")?;
                Ok(Item {
                    id: ItemId::from_uuid(id),
                    list_id: ListId::from_uuid(list_id),
                    category_id: category_id.map(CategoryId::from_uuid),
                    name: get(&row, "name")?,
                    quantity: get(&row, "quantity")?,
                    image_url: get(&row, "imageUrl")?,
                    purchased: get(&row, "purchased")?,
                    position: get(&row, "position")?,
                })
            })
            .collect()
    }
}

fn get<'r, T>(row: &'r sqlx::postgres::PgRow, column: &str) -> Result<T, ListError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column)
        .map_err(|e| ListError::database(format!("Bad column '{}': {}", column, e)))
}

#[async_trait]
impl ListReader for PostgresListReader {
    async fn shared_list(&self, list_id: &ListId) -> Result<SharedListData, ListError> {
        let list = self.fetch_list(list_id).await?;
        let categories = self.fetch_categories().await?;
        let items = self.fetch_items(list_id).await?;

        Ok(SharedListData {
            list,
            categories,
            items,
        })
    }

    async fn owner_of(&self, list_id: &ListId) -> Result<Option<UserId>, ListError> {
        let row = sqlx::query(r#"SELECT "userId" FROM "List" WHERE id = $1"#)
            .bind(list_id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ListError::database(format!("Failed to fetch list owner: {}", e)))?;

        row.map(|row| {
            let user_id: String = get(&row, "userId")?;
            UserId::new(user_id).map_err(|e| ListError::database(format!("Bad owner id: {}", e)))
        })
        .transpose()
    }
}
