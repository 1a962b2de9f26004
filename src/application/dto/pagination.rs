use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of a page-number paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total: u64) -> Self {
        let seen = u64::from(page.saturating_sub(1)) * u64::from(page_size) + items.len() as u64;
        Self {
            items,
            page,
            page_size,
            total,
            has_more: seen < total,
        }
    }
}
