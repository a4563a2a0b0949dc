// src/presentation/http/extractors.rs
use crate::application::{
    commands::blogs::{CreateBlogCommand, UpdateBlogCommand},
    ports::assets::ImageUpload,
};
use crate::presentation::http::error::{HttpError, HttpResult};
use axum::{
    Json,
    extract::{FromRequest, Multipart, Request, multipart::Field},
    http::header::CONTENT_TYPE,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

/// Multipart part names that carry the cover image file.
const IMAGE_PARTS: [&str; 2] = ["image", "coverImage"];

/// Body of create and update requests. Every field is optional at this layer;
/// the command services decide what is required.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(alias = "readTime")]
    pub read_time_minutes: Option<i32>,
    #[serde(alias = "category")]
    pub category_id: Option<String>,
    pub slug: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub published_date: Option<DateTime<Utc>>,
    /// Externally hosted cover image. Ignored when a file is uploaded.
    #[serde(alias = "coverImageUrl")]
    pub cover_image: Option<String>,
}

impl BlogRequest {
    fn set_text(&mut self, name: &str, value: String) -> HttpResult<()> {
        match name {
            "title" => self.title = Some(value),
            "content" => self.content = Some(value),
            "readTimeMinutes" | "readTime" => self.read_time_minutes = parse_read_time(&value)?,
            "categoryId" | "category" => self.category_id = Some(value),
            "slug" => self.slug = Some(value),
            "metaTitle" => self.meta_title = Some(value),
            "metaDescription" => self.meta_description = Some(value),
            "publishedDate" => self.published_date = parse_published_date(&value)?,
            "coverImage" | "coverImageUrl" => self.cover_image = Some(value),
            other => tracing::debug!(field = other, "ignoring unknown form field"),
        }
        Ok(())
    }
}

fn parse_read_time(value: &str) -> HttpResult<Option<i32>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<i32>()
        .map(Some)
        .map_err(|_| HttpError::bad_request("readTimeMinutes must be an integer"))
}

/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates (midnight UTC).
fn parse_published_date(value: &str) -> HttpResult<Option<DateTime<Utc>>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Some(naive.and_utc()))
        .ok_or_else(|| HttpError::bad_request("publishedDate must be an RFC 3339 timestamp"))
}

/// A create/update payload read from either a JSON body or a multipart form.
#[derive(Debug, Default)]
pub struct BlogSubmission {
    pub request: BlogRequest,
    pub image: Option<ImageUpload>,
}

impl BlogSubmission {
    pub fn into_create_command(self) -> CreateBlogCommand {
        let BlogRequest {
            title,
            content,
            read_time_minutes,
            category_id,
            slug,
            meta_title,
            meta_description,
            published_date,
            cover_image,
        } = self.request;

        CreateBlogCommand {
            title,
            content,
            read_time_minutes,
            category_id,
            slug,
            meta_title,
            meta_description,
            published_date,
            image: self.image,
            cover_image_url: cover_image,
        }
    }

    pub fn into_update_command(self, id: String) -> UpdateBlogCommand {
        let BlogRequest {
            title,
            content,
            read_time_minutes,
            category_id,
            slug,
            meta_title,
            meta_description,
            published_date,
            cover_image,
        } = self.request;

        UpdateBlogCommand {
            id,
            title,
            content,
            read_time_minutes,
            category_id,
            slug,
            meta_title,
            meta_description,
            published_date,
            image: self.image,
            cover_image_url: cover_image,
        }
    }

    async fn from_multipart(mut multipart: Multipart) -> HttpResult<Self> {
        let mut submission = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| HttpError::new(err.status(), err.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            if IMAGE_PARTS.contains(&name.as_str()) && field.file_name().is_some() {
                if let Some(upload) = read_image(field).await? {
                    submission.image = Some(upload);
                }
                continue;
            }

            let value = field
                .text()
                .await
                .map_err(|err| HttpError::new(err.status(), err.body_text()))?;
            submission.request.set_text(&name, value)?;
        }

        Ok(submission)
    }
}

/// Browsers send an empty, unnamed file part when no file was picked.
async fn read_image(field: Field<'_>) -> HttpResult<Option<ImageUpload>> {
    let file_name = field.file_name().unwrap_or_default().to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|err| HttpError::new(err.status(), err.body_text()))?;

    if bytes.is_empty() && file_name.is_empty() {
        return Ok(None);
    }

    let upload = ImageUpload::new(bytes, content_type);
    Ok(Some(if file_name.is_empty() {
        upload
    } else {
        upload.with_file_name(file_name)
    }))
}

impl<S> FromRequest<S> for BlogSubmission
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|rejection| HttpError::new(rejection.status(), rejection.body_text()))?;
            return Self::from_multipart(multipart).await;
        }

        let Json(request) = Json::<BlogRequest>::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;

        Ok(Self {
            request,
            image: None,
        })
    }
}
