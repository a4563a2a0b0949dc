// src/application/ports/assets.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use async_trait::async_trait;
use bytes::Bytes;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Raw cover image received from a client.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Bytes,
    pub content_type: String,
    pub file_name: Option<String>,
}

impl ImageUpload {
    pub fn new(bytes: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: content_type.into(),
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UploadPolicy {
    pub max_bytes: usize,
}

impl UploadPolicy {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    pub fn check(&self, upload: &ImageUpload) -> ApplicationResult<()> {
        if upload.bytes.is_empty() {
            return Err(ApplicationError::validation("image required"));
        }
        if !upload.content_type.starts_with("image/") {
            return Err(ApplicationError::validation(format!(
                "unsupported image type: {}",
                upload.content_type
            )));
        }
        if upload.bytes.len() > self.max_bytes {
            return Err(ApplicationError::validation(format!(
                "image exceeds {} bytes",
                self.max_bytes
            )));
        }
        Ok(())
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UPLOAD_BYTES)
    }
}

/// External storage for cover images, addressed by the public URL it hands back.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Persist the image and return its public URL. Failures surface as `ApplicationError::Upload`.
    async fn store(&self, upload: ImageUpload) -> ApplicationResult<String>;

    /// Release a previously stored image. Deleting an asset that no longer exists is not an error.
    async fn delete(&self, url: &str) -> ApplicationResult<()>;

    /// Whether `url` points at an asset this store owns (as opposed to an external link).
    fn manages(&self, url: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_rejects_non_images() {
        let policy = UploadPolicy::default();
        let upload = ImageUpload::new(vec![1u8, 2, 3], "application/pdf");
        assert!(matches!(
            policy.check(&upload),
            Err(ApplicationError::Validation(_))
        ));
    }

    #[test]
    fn policy_rejects_oversized_images() {
        let policy = UploadPolicy::new(2);
        let upload = ImageUpload::new(vec![1u8, 2, 3], "image/png");
        assert!(policy.check(&upload).is_err());
        assert!(UploadPolicy::new(3).check(&upload).is_ok());
    }

    #[test]
    fn policy_rejects_empty_payload() {
        let upload = ImageUpload::new(Vec::<u8>::new(), "image/png");
        assert!(UploadPolicy::default().check(&upload).is_err());
    }
}
