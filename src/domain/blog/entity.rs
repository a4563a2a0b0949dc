// src/domain/blog/entity.rs
use crate::domain::blog::value_objects::{
    BlogContent, BlogId, BlogSlug, BlogTitle, CoverImageUrl, MetaDescription, MetaTitle, ReadTime,
};
use crate::domain::category::CategoryId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct BlogPost {
    pub id: BlogId,
    pub title: BlogTitle,
    pub slug: BlogSlug,
    pub content: BlogContent,
    pub cover_image_url: CoverImageUrl,
    pub read_time: ReadTime,
    pub category_id: CategoryId,
    pub meta_title: MetaTitle,
    pub meta_description: MetaDescription,
    pub published_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Scheduled posts stay hidden from public listings until their publish date passes.
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        self.published_date <= now
    }
}

#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub id: BlogId,
    pub title: BlogTitle,
    pub slug: BlogSlug,
    pub content: BlogContent,
    pub cover_image_url: CoverImageUrl,
    pub read_time: ReadTime,
    pub category_id: CategoryId,
    pub meta_title: MetaTitle,
    pub meta_description: MetaDescription,
    pub published_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Partial patch: `None` leaves the stored value untouched.
#[derive(Debug, Clone)]
pub struct BlogPostUpdate {
    pub id: BlogId,
    pub title: Option<BlogTitle>,
    pub slug: Option<BlogSlug>,
    pub content: Option<BlogContent>,
    pub cover_image_url: Option<CoverImageUrl>,
    pub read_time: Option<ReadTime>,
    pub category_id: Option<CategoryId>,
    pub meta_title: Option<MetaTitle>,
    pub meta_description: Option<MetaDescription>,
    pub published_date: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPostUpdate {
    pub fn new(id: BlogId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            cover_image_url: None,
            read_time: None,
            category_id: None,
            meta_title: None,
            meta_description: None,
            published_date: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: BlogTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: BlogSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: BlogContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_cover_image_url(mut self, url: CoverImageUrl) -> Self {
        self.cover_image_url = Some(url);
        self
    }

    pub fn with_read_time(mut self, read_time: ReadTime) -> Self {
        self.read_time = Some(read_time);
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_meta_title(mut self, meta_title: MetaTitle) -> Self {
        self.meta_title = Some(meta_title);
        self
    }

    pub fn with_meta_description(mut self, meta_description: MetaDescription) -> Self {
        self.meta_description = Some(meta_description);
        self
    }

    pub fn with_published_date(mut self, published_date: DateTime<Utc>) -> Self {
        self.published_date = Some(published_date);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.content.is_none()
            && self.cover_image_url.is_none()
            && self.read_time.is_none()
            && self.category_id.is_none()
            && self.meta_title.is_none()
            && self.meta_description.is_none()
            && self.published_date.is_none()
    }

    /// Apply the patch to an in-memory copy of the post.
    pub fn apply_to(self, post: &mut BlogPost) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(slug) = self.slug {
            post.slug = slug;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(url) = self.cover_image_url {
            post.cover_image_url = url;
        }
        if let Some(read_time) = self.read_time {
            post.read_time = read_time;
        }
        if let Some(category_id) = self.category_id {
            post.category_id = category_id;
        }
        if let Some(meta_title) = self.meta_title {
            post.meta_title = meta_title;
        }
        if let Some(meta_description) = self.meta_description {
            post.meta_description = meta_description;
        }
        if let Some(published_date) = self.published_date {
            post.published_date = published_date;
        }
        post.updated_at = self.updated_at;
    }
}
