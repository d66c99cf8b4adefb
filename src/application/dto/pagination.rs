use crate::domain::pagination::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of results plus the bookkeeping callers need to paginate.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let size = request.size();
        let total_pages = total_elements.div_ceil(u64::from(size));
        Self {
            items,
            page: request.page(),
            size,
            total_elements,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
