// src/application/commands/blogs/create.rs
use super::{BlogCommandService, image::ImageSource, service::non_blank};
use crate::{
    application::{
        dto::BlogDto,
        error::{ApplicationError, ApplicationResult},
        ports::assets::ImageUpload,
    },
    domain::{
        blog::{
            BlogContent, BlogId, BlogTitle, MetaDescription, MetaTitle, NewBlogPost, ReadTime,
        },
        category::CategoryId,
    },
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct CreateBlogCommand {
    pub title: Option<String>,
    pub content: Option<String>,
    pub read_time_minutes: Option<i32>,
    pub category_id: Option<String>,
    pub slug: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub published_date: Option<DateTime<Utc>>,
    pub image: Option<ImageUpload>,
    pub cover_image_url: Option<String>,
}

impl CreateBlogCommand {
    pub fn builder() -> CreateBlogCommandBuilder {
        CreateBlogCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateBlogCommandBuilder {
    inner: CreateBlogCommand,
}

impl CreateBlogCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.inner.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.inner.content = Some(content.into());
        self
    }

    pub fn read_time_minutes(mut self, minutes: i32) -> Self {
        self.inner.read_time_minutes = Some(minutes);
        self
    }

    pub fn category_id(mut self, category_id: impl Into<String>) -> Self {
        self.inner.category_id = Some(category_id.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.inner.slug = Some(slug.into());
        self
    }

    pub fn meta_title(mut self, meta_title: impl Into<String>) -> Self {
        self.inner.meta_title = Some(meta_title.into());
        self
    }

    pub fn meta_description(mut self, meta_description: impl Into<String>) -> Self {
        self.inner.meta_description = Some(meta_description.into());
        self
    }

    pub fn published_date(mut self, published_date: DateTime<Utc>) -> Self {
        self.inner.published_date = Some(published_date);
        self
    }

    pub fn image(mut self, image: ImageUpload) -> Self {
        self.inner.image = Some(image);
        self
    }

    pub fn cover_image_url(mut self, url: impl Into<String>) -> Self {
        self.inner.cover_image_url = Some(url.into());
        self
    }

    pub fn build(self) -> CreateBlogCommand {
        self.inner
    }
}

/// Create inputs after field validation, before any store is consulted.
struct ValidatedCreate {
    title: BlogTitle,
    content: BlogContent,
    read_time: ReadTime,
    category_id: CategoryId,
    slug_source: Option<String>,
    meta_title: MetaTitle,
    meta_description: MetaDescription,
    published_date: Option<DateTime<Utc>>,
    image: ImageSource,
}

impl BlogCommandService {
    pub async fn create_blog(&self, command: CreateBlogCommand) -> ApplicationResult<BlogDto> {
        let input = self.validate_create(command)?;

        if !self.categories.exists(input.category_id).await? {
            return Err(ApplicationError::not_found("category"));
        }

        let now = self.clock.now();
        let slug_source = input
            .slug_source
            .as_deref()
            .unwrap_or_else(|| input.title.as_str());
        let slug = self.slug_service.claim(slug_source, now, None).await?;

        // Upload last so a rejected request never leaves an orphaned asset behind.
        let image = self.resolve_image(input.image).await?;

        let new_post = NewBlogPost {
            id: BlogId::generate(),
            title: input.title,
            slug,
            content: input.content,
            cover_image_url: image.url.clone(),
            read_time: input.read_time,
            category_id: input.category_id,
            meta_title: input.meta_title,
            meta_description: input.meta_description,
            published_date: input.published_date.unwrap_or(now),
            created_at: now,
        };

        let created = match self.write_repo.insert(new_post).await {
            Ok(created) => created,
            Err(err) => {
                if image.uploaded {
                    self.release_image(&image.url).await;
                }
                return Err(err.into());
            }
        };

        tracing::info!(blog_id = %created.id, slug = %created.slug, "blog post created");
        self.assembler.one(created).await
    }

    fn validate_create(&self, command: CreateBlogCommand) -> ApplicationResult<ValidatedCreate> {
        let CreateBlogCommand {
            title,
            content,
            read_time_minutes,
            category_id,
            slug,
            meta_title,
            meta_description,
            published_date,
            image,
            cover_image_url,
        } = command;

        let (Some(title), Some(content), Some(read_time), Some(category_id)) = (
            non_blank(title),
            non_blank(content),
            read_time_minutes,
            non_blank(category_id),
        ) else {
            return Err(ApplicationError::validation("missing required field"));
        };

        let title = BlogTitle::new(title)?;
        let content = BlogContent::new(content)?;
        let read_time = ReadTime::new(read_time)?;
        let category_id = CategoryId::parse(&category_id)?;

        let meta_title = match non_blank(meta_title) {
            Some(value) => MetaTitle::new(value)?,
            None => MetaTitle::from_title(&title),
        };
        let meta_description = match non_blank(meta_description) {
            Some(value) => MetaDescription::new(value)?,
            None => MetaDescription::from_content(&content),
        };

        let image = self
            .image_source(image, non_blank(cover_image_url))?
            .ok_or_else(|| ApplicationError::validation("image required"))?;

        Ok(ValidatedCreate {
            title,
            content,
            read_time,
            category_id,
            slug_source: non_blank(slug),
            meta_title,
            meta_description,
            published_date,
            image,
        })
    }
}
