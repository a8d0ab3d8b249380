//! Response DTOs for the shared list view.

use serde::{Deserialize, Serialize};

use crate::domain::list::{Item, Progress, SharedListData};
use crate::domain::share::SharePermission;

/// POST /api/shared-lists/:id/unlock request body.
#[derive(Debug, Deserialize)]
pub struct UnlockRequest {
    pub password: String,
}

/// Response of both gate endpoints, tagged by gate state.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SharedListResponse {
    /// A password must be submitted before any content is revealed.
    PasswordRequired,
    /// Access granted; capability and content attached.
    Granted {
        permission: SharePermission,
        /// True when mutation affordances must be disabled.
        read_only: bool,
        list: SharedListPayload,
    },
}

impl SharedListResponse {
    pub fn granted(permission: SharePermission, data: &SharedListData) -> Self {
        SharedListResponse::Granted {
            permission,
            read_only: permission.is_read_only(),
            list: SharedListPayload::from_data(data),
        }
    }
}

/// The list as the shared view renders it.
#[derive(Debug, Serialize)]
pub struct SharedListPayload {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub month: i32,
    pub year: i32,
    pub progress: Progress,
    pub categories: Vec<CategoryPayload>,
    pub uncategorized: Vec<ItemPayload>,
}

/// A category and its items.
#[derive(Debug, Serialize)]
pub struct CategoryPayload {
    pub id: String,
    pub name: String,
    pub color: String,
    pub items: Vec<ItemPayload>,
}

/// One item row.
#[derive(Debug, Serialize)]
pub struct ItemPayload {
    pub id: String,
    pub name: String,
    pub quantity: i32,
    pub image_url: Option<String>,
    pub purchased: bool,
}

impl ItemPayload {
    fn from_item(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            quantity: item.quantity,
            image_url: item.image_url.clone(),
            purchased: item.purchased,
        }
    }
}

impl SharedListPayload {
    fn from_data(data: &SharedListData) -> Self {
        let categories = data
            .items_by_category()
            .into_iter()
            .map(|(category, items)| CategoryPayload {
                id: category.id.to_string(),
                name: category.name.clone(),
                color: category.color.clone(),
                items: items.into_iter().map(ItemPayload::from_item).collect(),
            })
            .collect();

        Self {
            id: data.list.id.to_string(),
            name: data.list.name.clone(),
            description: data.list.description.clone(),
            month: data.list.month,
            year: data.list.year,
            progress: data.progress(),
            categories,
            uncategorized: data
                .uncategorized_items()
                .into_iter()
                .map(ItemPayload::from_item)
                .collect(),
        }
    }
}
