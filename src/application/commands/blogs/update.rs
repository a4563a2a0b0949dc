use super::{BlogCommandService, image::ImageSource, service::non_blank};
use crate::{
    application::{
        dto::BlogDto,
        error::{ApplicationError, ApplicationResult},
        ports::assets::ImageUpload,
    },
    domain::{
        blog::{
            BlogContent, BlogId, BlogPost, BlogPostUpdate, BlogTitle, MetaDescription, MetaTitle,
            ReadTime,
        },
        category::CategoryId,
    },
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct UpdateBlogCommand {
    pub id: String,
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

impl BlogCommandService {
    pub async fn update_blog(&self, command: UpdateBlogCommand) -> ApplicationResult<BlogDto> {
        let id = BlogId::parse(&command.id).ok_or_else(|| ApplicationError::not_found("blog"))?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("blog"))?;

        let UpdateBlogCommand {
            id: _,
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

        let now = self.clock.now();
        let mut update = BlogPostUpdate::new(id, now);

        if let Some(title) = title {
            update = update.with_title(BlogTitle::new(title)?);
        }
        if let Some(content) = content {
            update = update.with_content(BlogContent::new(content)?);
        }
        if let Some(minutes) = read_time_minutes {
            update = update.with_read_time(ReadTime::new(minutes)?);
        }
        if let Some(meta_title) = meta_title {
            update = update.with_meta_title(MetaTitle::new(meta_title)?);
        }
        if let Some(meta_description) = meta_description {
            update = update.with_meta_description(MetaDescription::new(meta_description)?);
        }
        if let Some(published_date) = published_date {
            update = update.with_published_date(published_date);
        }
        let image = self.image_source(image, non_blank(cover_image_url))?;

        if let Some(category_id) = non_blank(category_id) {
            let category_id = CategoryId::parse(&category_id)?;
            if category_id != existing.category_id
                && !self.categories.exists(category_id).await?
            {
                return Err(ApplicationError::not_found("category"));
            }
            update = update.with_category(category_id);
        }

        if let Some(slug) = non_blank(slug) {
            let slug = self.slug_service.claim(&slug, now, Some(id)).await?;
            update = update.with_slug(slug);
        }

        self.apply_update(existing, update, image).await
    }

    async fn apply_update(
        &self,
        existing: BlogPost,
        mut update: BlogPostUpdate,
        image: Option<ImageSource>,
    ) -> ApplicationResult<BlogDto> {
        let replaced = match image {
            Some(source) => {
                let resolved = self.resolve_image(source).await?;
                update = update.with_cover_image_url(resolved.url.clone());
                Some(resolved)
            }
            None => None,
        };

        if update.is_empty() {
            return self.assembler.one(existing).await;
        }

        let updated = match self.write_repo.update(update).await {
            Ok(updated) => updated,
            Err(err) => {
                if let Some(resolved) = replaced.as_ref().filter(|r| r.uploaded) {
                    self.release_image(&resolved.url).await;
                }
                return Err(err.into());
            }
        };

        if replaced.is_some() && updated.cover_image_url != existing.cover_image_url {
            self.release_image(&existing.cover_image_url).await;
        }

        tracing::info!(blog_id = %updated.id, slug = %updated.slug, "blog post updated");
        self.assembler.one(updated).await
    }
}
