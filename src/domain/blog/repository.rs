use crate::domain::blog::entity::{BlogPost, BlogPostUpdate, NewBlogPost};
use crate::domain::blog::listing::{BlogListFilter, BlogPage, BlogSort, PageRequest};
use crate::domain::blog::value_objects::{BlogId, BlogSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait BlogWriteRepository: Send + Sync {
    /// Fails with `DomainError::Conflict("slug")` when the store already holds the slug.
    async fn insert(&self, post: NewBlogPost) -> DomainResult<BlogPost>;
    async fn update(&self, update: BlogPostUpdate) -> DomainResult<BlogPost>;
    async fn delete(&self, id: BlogId) -> DomainResult<()>;
}

#[async_trait]
pub trait BlogReadRepository: Send + Sync {
    async fn find_by_id(&self, id: BlogId) -> DomainResult<Option<BlogPost>>;
    async fn find_by_slug(&self, slug: &BlogSlug) -> DomainResult<Option<BlogPost>>;
    /// Returns the requested page together with the total number of posts matching `filter`.
    /// Implementations run the page query and the count query against one snapshot.
    async fn list_page(
        &self,
        filter: &BlogListFilter,
        sort: BlogSort,
        page: PageRequest,
    ) -> DomainResult<BlogPage>;
}
