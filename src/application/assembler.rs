// src/application/assembler.rs
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::{ApplicationResult, dto::BlogDto};
use crate::domain::blog::BlogPost;
use crate::domain::category::{CategoryId, CategoryRepository};

/// Builds response DTOs, resolving each post's category reference to its display title.
pub struct BlogAssembler {
    categories: Arc<dyn CategoryRepository>,
}

impl BlogAssembler {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn one(&self, post: BlogPost) -> ApplicationResult<BlogDto> {
        let summaries = self.categories.find_summaries(&[post.category_id]).await?;
        Ok(BlogDto::from_parts(post, summaries.first()))
    }

    pub async fn many(&self, posts: Vec<BlogPost>) -> ApplicationResult<Vec<BlogDto>> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let mut ids: Vec<CategoryId> = posts.iter().map(|p| p.category_id).collect();
        ids.sort_by_key(|id| id.0);
        ids.dedup();

        let titles: HashMap<CategoryId, _> = self
            .categories
            .find_summaries(&ids)
            .await?
            .into_iter()
            .map(|summary| (summary.id, summary))
            .collect();

        Ok(posts
            .into_iter()
            .map(|post| {
                let category = titles.get(&post.category_id);
                BlogDto::from_parts(post, category)
            })
            .collect())
    }
}
