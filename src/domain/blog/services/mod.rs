// src/domain/blog/services/mod.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::blog::repository::BlogReadRepository;
use crate::domain::blog::slug;
use crate::domain::blog::value_objects::{BlogId, BlogSlug};
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service that normalizes slugs and checks them against stored posts.
///
/// The check is advisory: the store's unique constraint is what finally rejects a duplicate
/// written by a concurrent request.
pub struct BlogSlugService {
    read_repo: Arc<dyn BlogReadRepository>,
}

impl BlogSlugService {
    pub fn new(read_repo: Arc<dyn BlogReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn claim(
        &self,
        source: &str,
        now: DateTime<Utc>,
        owner: Option<BlogId>,
    ) -> DomainResult<BlogSlug> {
        let slug = slug::normalize(source, now);
        match self.read_repo.find_by_slug(&slug).await? {
            Some(existing) if Some(existing.id) == owner => Ok(slug),
            Some(_) => Err(DomainError::Conflict("slug".into())),
            None => Ok(slug),
        }
    }
}
