//! Read models for the shared list view.
//!
//! Lists, items, and categories are owned by the hosted data store; this
//! backend only reads them to render the shared view, so these are plain
//! records rather than aggregates.

use serde::Serialize;

use crate::domain::foundation::{CategoryId, ItemId, ListId, Timestamp, UserId};

/// A monthly shopping list.
#[derive(Debug, Clone, Serialize)]
pub struct List {
    pub id: ListId,
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    /// 1-12.
    pub month: i32,
    pub year: i32,
    pub created_at: Timestamp,
}

/// An item on a shopping list.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub list_id: ListId,
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub quantity: i32,
    pub image_url: Option<String>,
    pub purchased: bool,
    pub position: i32,
}

/// A user-defined item category.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub color: String,
    pub position: i32,
}

/// Purchase progress over a set of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub total_items: usize,
    pub purchased_items: usize,
    pub percentage: u32,
}

/// Everything the shared view renders for one list.
#[derive(Debug, Clone)]
pub struct SharedListData {
    pub list: List,
    pub categories: Vec<Category>,
    pub items: Vec<Item>,
}

impl SharedListData {
    /// Items grouped per category, in category position order. Categories
    /// with no items are skipped, matching the shared view.
    pub fn items_by_category(&self) -> Vec<(&Category, Vec<&Item>)> {
        self.categories
            .iter()
            .map(|category| {
                let items = self
                    .items
                    .iter()
                    .filter(|item| item.category_id == Some(category.id))
                    .collect::<Vec<_>>();
                (category, items)
            })
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }

    /// Items with no category, shown after the categorized groups.
    pub fn uncategorized_items(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.category_id.is_none())
            .collect()
    }

    /// Purchase progress over all items.
    pub fn progress(&self) -> Progress {
        let total_items = self.items.len();
        let purchased_items = self.items.iter().filter(|item| item.purchased).count();
        let percentage = if total_items > 0 {
            ((purchased_items as f64 / total_items as f64) * 100.0).round() as u32
        } else {
            0
        };
        Progress {
            total_items,
            purchased_items,
            percentage,
        }
    }
}
