use crate::domain::blog::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub current_page: u32,
    pub limit: u32,
    pub total_pages: u64,
    pub total_blogs: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationDto {
    pub fn new(request: PageRequest, total: u64) -> Self {
        let limit = u64::from(request.limit());
        let total_pages = total.div_ceil(limit);
        let current_page = request.page();
        Self {
            current_page,
            limit: request.limit(),
            total_pages,
            total_blogs: total,
            has_next: u64::from(current_page) < total_pages,
            has_prev: current_page > 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PaginationDto,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, pagination: PaginationDto) -> Self {
        Self { items, pagination }
    }
}
