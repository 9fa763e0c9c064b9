use crate::domain::pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform page-number envelope for every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn from_page<S>(page: Page<S>) -> Self
    where
        S: Into<T>,
    {
        let request = page.request;
        let size = u64::from(request.page_size());
        let total_pages = u32::try_from(page.total.div_ceil(size)).unwrap_or(u32::MAX);
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            total: page.total,
            page: request.page(),
            page_size: request.page_size(),
            total_pages,
        }
    }
}
