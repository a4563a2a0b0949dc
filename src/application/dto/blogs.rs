use crate::domain::blog::BlogPost;
use crate::domain::category::CategorySummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRefDto {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub cover_image_url: String,
    pub read_time_minutes: i32,
    pub category: CategoryRefDto,
    pub meta_title: String,
    pub meta_description: String,
    pub published_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogDto {
    pub fn from_parts(post: BlogPost, category: Option<&CategorySummary>) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            content: post.content.into_inner(),
            cover_image_url: post.cover_image_url.into_inner(),
            read_time_minutes: post.read_time.minutes(),
            category: CategoryRefDto {
                id: post.category_id.into(),
                title: category.map(|c| c.title.clone()),
            },
            meta_title: post.meta_title.into_inner(),
            meta_description: post.meta_description.into_inner(),
            published_date: post.published_date,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
