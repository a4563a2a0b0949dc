use super::BlogQueryService;
use crate::{
    application::{
        dto::BlogDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::blog::{BlogId, BlogPost, BlogSlug},
};

/// Look a post up by id or, failing that, by slug.
pub struct GetBlogQuery {
    pub identifier: String,
}

pub struct GetBlogBySlugQuery {
    pub slug: String,
}

impl BlogQueryService {
    pub async fn get_blog(&self, query: GetBlogQuery) -> ApplicationResult<BlogDto> {
        let identifier = query.identifier.trim();

        if let Some(id) = BlogId::parse(identifier) {
            if let Some(post) = self.read_repo.find_by_id(id).await? {
                return self.assembler.one(post).await;
            }
        }

        let post = self
            .find_by_slug(identifier)
            .await?
            .ok_or_else(|| ApplicationError::not_found("blog"))?;
        self.assembler.one(post).await
    }

    pub async fn get_blog_by_slug(&self, query: GetBlogBySlugQuery) -> ApplicationResult<BlogDto> {
        let post = self
            .find_by_slug(query.slug.trim())
            .await?
            .ok_or_else(|| ApplicationError::not_found("blog"))?;
        self.assembler.one(post).await
    }

    /// A value that cannot be a slug simply matches nothing.
    async fn find_by_slug(&self, value: &str) -> ApplicationResult<Option<BlogPost>> {
        match BlogSlug::new(value) {
            Ok(slug) => Ok(self.read_repo.find_by_slug(&slug).await?),
            Err(_) => Ok(None),
        }
    }
}
