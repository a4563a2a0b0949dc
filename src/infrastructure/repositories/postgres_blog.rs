// src/infrastructure/repositories/postgres_blog.rs
use super::map_sqlx;
use crate::domain::blog::{
    BlogContent, BlogId, BlogListFilter, BlogPage, BlogPost, BlogPostUpdate, BlogReadRepository,
    BlogSlug, BlogSort, BlogTitle, BlogWriteRepository, CoverImageUrl, MetaDescription, MetaTitle,
    NewBlogPost, PageRequest, ReadTime,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const BLOG_COLUMNS: &str = "id, title, slug, content, cover_image_url, read_time_minutes, \
     category_id, meta_title, meta_description, published_date, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresBlogWriteRepository {
    pool: PgPool,
}

impl PostgresBlogWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresBlogReadRepository {
    pool: PgPool,
}

impl PostgresBlogReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BlogRow {
    id: Uuid,
    title: String,
    slug: String,
    content: String,
    cover_image_url: String,
    read_time_minutes: i32,
    category_id: Uuid,
    meta_title: String,
    meta_description: String,
    published_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BlogRow> for BlogPost {
    type Error = DomainError;

    fn try_from(row: BlogRow) -> Result<Self, Self::Error> {
        Ok(BlogPost {
            id: BlogId(row.id),
            title: BlogTitle::new(row.title)?,
            slug: BlogSlug::new(row.slug)?,
            content: BlogContent::new(row.content)?,
            cover_image_url: CoverImageUrl::new(row.cover_image_url)?,
            read_time: ReadTime::new(row.read_time_minutes)?,
            category_id: CategoryId(row.category_id),
            meta_title: MetaTitle::new(row.meta_title)?,
            meta_description: MetaDescription::new(row.meta_description)?,
            published_date: row.published_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl BlogWriteRepository for PostgresBlogWriteRepository {
    async fn insert(&self, post: NewBlogPost) -> DomainResult<BlogPost> {
        let NewBlogPost {
            id,
            title,
            slug,
            content,
            cover_image_url,
            read_time,
            category_id,
            meta_title,
            meta_description,
            published_date,
            created_at,
        } = post;

        let row = sqlx::query_as::<_, BlogRow>(&format!(
            "INSERT INTO blog_posts (id, title, slug, content, cover_image_url, read_time_minutes,
                category_id, meta_title, meta_description, published_date, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
             RETURNING {BLOG_COLUMNS}"
        ))
        .bind(Uuid::from(id))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(cover_image_url.as_str())
        .bind(read_time.minutes())
        .bind(Uuid::from(category_id))
        .bind(meta_title.as_str())
        .bind(meta_description.as_str())
        .bind(published_date)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        BlogPost::try_from(row)
    }

    async fn update(&self, update: BlogPostUpdate) -> DomainResult<BlogPost> {
        let BlogPostUpdate {
            id,
            title,
            slug,
            content,
            cover_image_url,
            read_time,
            category_id,
            meta_title,
            meta_description,
            published_date,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE blog_posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }
        if let Some(url) = cover_image_url {
            builder.push(", cover_image_url = ");
            builder.push_bind(url.into_inner());
        }
        if let Some(read_time) = read_time {
            builder.push(", read_time_minutes = ");
            builder.push_bind(read_time.minutes());
        }
        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(Uuid::from(category_id));
        }
        if let Some(meta_title) = meta_title {
            builder.push(", meta_title = ");
            builder.push_bind(meta_title.into_inner());
        }
        if let Some(meta_description) = meta_description {
            builder.push(", meta_description = ");
            builder.push_bind(meta_description.into_inner());
        }
        if let Some(published_date) = published_date {
            builder.push(", published_date = ");
            builder.push_bind(published_date);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(Uuid::from(id));
        builder.push(" RETURNING ");
        builder.push(BLOG_COLUMNS);

        let row = builder
            .build_query_as::<BlogRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("blog".into()))?;

        BlogPost::try_from(row)
    }

    async fn delete(&self, id: BlogId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("blog".into()));
        }
        Ok(())
    }
}

/// Escape `LIKE` metacharacters so user search terms match literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

impl PostgresBlogReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &BlogListFilter) {
        builder.push(" WHERE published_date <= ");
        builder.push_bind(filter.visible_at);

        if let Some(category_id) = filter.category_id {
            builder.push(" AND category_id = ");
            builder.push_bind(Uuid::from(category_id));
        }

        if let Some(term) = filter.search.as_deref() {
            let pattern = like_pattern(term);
            builder.push(" AND (title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR content ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }
}

#[async_trait]
impl BlogReadRepository for PostgresBlogReadRepository {
    async fn find_by_id(&self, id: BlogId) -> DomainResult<Option<BlogPost>> {
        let row = sqlx::query_as::<_, BlogRow>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blog_posts WHERE id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(BlogPost::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &BlogSlug) -> DomainResult<Option<BlogPost>> {
        let row = sqlx::query_as::<_, BlogRow>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blog_posts WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(BlogPost::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: &BlogListFilter,
        sort: BlogSort,
        page: PageRequest,
    ) -> DomainResult<BlogPage> {
        // Count and page read from the same snapshot so totals agree with the slice.
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let mut count: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM blog_posts");
        Self::apply_filter(&mut count, filter);
        let total: i64 = count
            .build_query_scalar::<i64>()
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let offset = i64::try_from(page.offset())
            .map_err(|_| DomainError::Validation("page is too large".into()))?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {BLOG_COLUMNS} FROM blog_posts"));
        Self::apply_filter(&mut builder, filter);
        let direction = sort.order.keyword();
        builder.push(format!(
            " ORDER BY {} {direction}, id {direction}",
            sort.field.column()
        ));
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(page.limit()));
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let rows = builder
            .build_query_as::<BlogRow>()
            .fetch_all(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(BlogPost::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BlogPage {
            items,
            total: u64::try_from(total).unwrap_or_default(),
        })
    }
}
