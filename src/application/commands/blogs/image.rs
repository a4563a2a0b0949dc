// src/application/commands/blogs/image.rs
use super::BlogCommandService;
use crate::{
    application::{ApplicationResult, error::ApplicationError, ports::assets::ImageUpload},
    domain::blog::CoverImageUrl,
};

/// Where a cover image comes from: raw bytes to upload or a URL used as-is.
pub(super) enum ImageSource {
    Upload(ImageUpload),
    Url(CoverImageUrl),
}

pub(super) struct ResolvedImage {
    pub url: CoverImageUrl,
    pub uploaded: bool,
}

impl BlogCommandService {
    /// Validate the incoming image without touching the asset store.
    pub(super) fn image_source(
        &self,
        upload: Option<ImageUpload>,
        url: Option<String>,
    ) -> ApplicationResult<Option<ImageSource>> {
        match (upload, url) {
            (Some(upload), _) => {
                self.upload_policy.check(&upload)?;
                Ok(Some(ImageSource::Upload(upload)))
            }
            (None, Some(url)) => Ok(Some(ImageSource::Url(CoverImageUrl::new(url)?))),
            (None, None) => Ok(None),
        }
    }

    pub(super) async fn resolve_image(&self, source: ImageSource) -> ApplicationResult<ResolvedImage> {
        match source {
            ImageSource::Url(url) => Ok(ResolvedImage {
                url,
                uploaded: false,
            }),
            ImageSource::Upload(upload) => {
                let stored = self.assets.store(upload).await.map_err(|err| match err {
                    ApplicationError::Upload(msg) => ApplicationError::Upload(msg),
                    other => ApplicationError::upload(other.to_string()),
                })?;
                let url = CoverImageUrl::new(stored)
                    .map_err(|_| ApplicationError::upload("asset store returned an empty url"))?;
                Ok(ResolvedImage {
                    url,
                    uploaded: true,
                })
            }
        }
    }

    /// Best-effort removal of an image held by the asset store; external URLs are left alone.
    pub(super) async fn release_image(&self, url: &CoverImageUrl) {
        if !self.assets.manages(url.as_str()) {
            return;
        }
        if let Err(err) = self.assets.delete(url.as_str()).await {
            tracing::warn!(url = %url.as_str(), error = %err, "failed to release cover image");
        }
    }
}
