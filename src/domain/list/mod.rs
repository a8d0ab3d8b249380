//! List module - read models for shared list content.

mod errors;
mod model;

pub use errors::ListError;
pub use model::{Category, Item, List, Progress, SharedListData};
