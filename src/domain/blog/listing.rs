// src/domain/blog/listing.rs
use crate::domain::blog::entity::BlogPost;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlogSortField {
    #[default]
    PublishedDate,
    CreatedAt,
    UpdatedAt,
    Title,
    ReadTime,
}

impl BlogSortField {
    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "publishedDate" => Ok(Self::PublishedDate),
            "createdAt" => Ok(Self::CreatedAt),
            "updatedAt" => Ok(Self::UpdatedAt),
            "title" => Ok(Self::Title),
            "readTime" | "readTimeMinutes" => Ok(Self::ReadTime),
            other => Err(DomainError::Validation(format!(
                "unsupported sortBy value: {other}"
            ))),
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::PublishedDate => "published_date",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Title => "title",
            Self::ReadTime => "read_time_minutes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> DomainResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(DomainError::Validation(format!(
                "sortOrder must be asc or desc, got {other}"
            ))),
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlogSort {
    pub field: BlogSortField,
    pub order: SortOrder,
}

impl BlogSort {
    pub fn new(field: BlogSortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Ordering used by in-memory stores; ties break on id so pages never overlap.
    pub fn compare(&self, a: &BlogPost, b: &BlogPost) -> std::cmp::Ordering {
        let primary = match self.field {
            BlogSortField::PublishedDate => a.published_date.cmp(&b.published_date),
            BlogSortField::CreatedAt => a.created_at.cmp(&b.created_at),
            BlogSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            BlogSortField::Title => a.title.as_str().cmp(b.title.as_str()),
            BlogSortField::ReadTime => a.read_time.cmp(&b.read_time),
        };
        let ordering = primary.then_with(|| a.id.0.cmp(&b.id.0));
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Filter shared by the page query and the count query of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogListFilter {
    pub visible_at: DateTime<Utc>,
    pub category_id: Option<CategoryId>,
    pub search: Option<String>,
}

impl BlogListFilter {
    pub fn visible_at(now: DateTime<Utc>) -> Self {
        Self {
            visible_at: now,
            category_id: None,
            search: None,
        }
    }

    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        self
    }

    pub fn matches(&self, post: &BlogPost) -> bool {
        if !post.is_visible_at(self.visible_at) {
            return false;
        }
        if self.category_id.is_some_and(|id| id != post.category_id) {
            return false;
        }
        match &self.search {
            Some(term) => {
                let needle = term.to_lowercase();
                post.title.as_str().to_lowercase().contains(&needle)
                    || post.content.as_str().to_lowercase().contains(&needle)
            }
            None => true,
        }
    }
}

/// One-based page window. Non-positive values are rejected rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> DomainResult<Self> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if page < 1 {
            return Err(DomainError::Validation("page must be at least 1".into()));
        }
        if limit < 1 {
            return Err(DomainError::Validation("limit must be at least 1".into()));
        }

        let page = u32::try_from(page)
            .map_err(|_| DomainError::Validation("page is too large".into()))?;
        let limit = u32::try_from(limit.min(MAX_LIMIT))
            .map_err(|_| DomainError::Validation("limit is too large".into()))?;

        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BlogPage {
    pub items: Vec<BlogPost>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let page = PageRequest::new(None, None).unwrap();
        assert_eq!(page.page(), 1);
        assert_eq!(page.limit(), 10);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn non_positive_values_are_rejected() {
        assert!(PageRequest::new(Some(0), None).is_err());
        assert!(PageRequest::new(Some(-3), None).is_err());
        assert!(PageRequest::new(None, Some(0)).is_err());
        assert!(PageRequest::new(None, Some(-1)).is_err());
    }

    #[test]
    fn limit_is_capped() {
        let page = PageRequest::new(Some(2), Some(1_000)).unwrap();
        assert_eq!(page.limit(), MAX_LIMIT as u32);
        assert_eq!(page.offset(), 100);
    }

    #[test]
    fn offset_for_third_page() {
        assert_eq!(PageRequest::new(Some(3), Some(10)).unwrap().offset(), 20);
    }

    #[test]
    fn sort_field_parsing() {
        assert_eq!(BlogSortField::parse("title").unwrap(), BlogSortField::Title);
        assert!(BlogSortField::parse("password").is_err());
        assert_eq!(SortOrder::parse("ASC").unwrap(), SortOrder::Asc);
        assert!(SortOrder::parse("sideways").is_err());
    }

    #[test]
    fn blank_search_is_ignored() {
        let filter = BlogListFilter::visible_at(Utc::now()).with_search(Some("   "));
        assert!(filter.search.is_none());
    }
}
