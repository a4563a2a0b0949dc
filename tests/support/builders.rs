// tests/support/builders.rs
use blog_core::domain::blog::*;
use blog_core::domain::category::CategoryId;
use chrono::{DateTime, Duration, Utc};

use super::mocks::fixed_now;

pub struct BlogPostBuilder {
    id: BlogId,
    title: String,
    slug: String,
    content: String,
    cover_image_url: String,
    read_time: i32,
    category_id: CategoryId,
    published_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl BlogPostBuilder {
    /// 既定では固定時刻の一日前に公開済みの記事
    pub fn new(category_id: CategoryId) -> Self {
        let yesterday = fixed_now() - Duration::days(1);
        Self {
            id: BlogId::generate(),
            title: "Test Blog".into(),
            slug: "test-blog".into(),
            content: "Test content".into(),
            cover_image_url: "https://images.example.com/cover.png".into(),
            read_time: 5,
            category_id,
            published_date: yesterday,
            created_at: yesterday,
        }
    }

    pub fn id(mut self, id: BlogId) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn cover_image_url(mut self, url: impl Into<String>) -> Self {
        self.cover_image_url = url.into();
        self
    }

    pub fn read_time(mut self, minutes: i32) -> Self {
        self.read_time = minutes;
        self
    }

    pub fn published_at(mut self, at: DateTime<Utc>) -> Self {
        self.published_date = at;
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn build(self) -> BlogPost {
        let title = BlogTitle::new(self.title).unwrap();
        let content = BlogContent::new(self.content).unwrap();
        BlogPost {
            id: self.id,
            meta_title: MetaTitle::from_title(&title),
            meta_description: MetaDescription::from_content(&content),
            title,
            slug: BlogSlug::new(self.slug).unwrap(),
            content,
            cover_image_url: CoverImageUrl::new(self.cover_image_url).unwrap(),
            read_time: ReadTime::new(self.read_time).unwrap(),
            category_id: self.category_id,
            published_date: self.published_date,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
