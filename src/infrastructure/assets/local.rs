// src/infrastructure/assets/local.rs
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::assets::{AssetStore, ImageUpload},
};
use async_trait::async_trait;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use uuid::Uuid;

/// Stores cover images on local disk and serves them under a public base URL.
#[derive(Clone, Debug)]
pub struct LocalAssetStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalAssetStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_name_for(&self, url: &str) -> Option<String> {
        let name = url
            .strip_prefix(self.public_base_url.as_str())?
            .strip_prefix('/')?;
        let safe = !name.is_empty()
            && !name.contains(['/', '\\'])
            && !name.starts_with('.');
        safe.then(|| name.to_string())
    }
}

fn extension_for(upload: &ImageUpload) -> String {
    let known = match upload.content_type.as_str() {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        "image/avif" => Some("avif"),
        "image/svg+xml" => Some("svg"),
        _ => None,
    };
    if let Some(ext) = known {
        return ext.to_string();
    }

    // Unrecognised image types keep the client's extension when it is a plain short token.
    upload
        .file_name
        .as_deref()
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| {
            (1..=5).contains(&ext.len()) && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "img".to_string())
}

#[async_trait]
impl AssetStore for LocalAssetStore {
    async fn store(&self, upload: ImageUpload) -> ApplicationResult<String> {
        let digest = blake3::hash(&upload.bytes).to_hex();
        let file_name = format!(
            "{}-{}.{}",
            &digest.as_str()[..16],
            Uuid::new_v4().simple(),
            extension_for(&upload)
        );

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|err| ApplicationError::upload(err.to_string()))?;
        tokio::fs::write(self.root.join(&file_name), &upload.bytes)
            .await
            .map_err(|err| ApplicationError::upload(err.to_string()))?;

        tracing::debug!(file = %file_name, bytes = upload.bytes.len(), "stored cover image");
        Ok(format!("{}/{}", self.public_base_url, file_name))
    }

    async fn delete(&self, url: &str) -> ApplicationResult<()> {
        let Some(file_name) = self.file_name_for(url) else {
            return Ok(());
        };

        match tokio::fs::remove_file(self.root.join(&file_name)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApplicationError::infrastructure(format!(
                "failed to delete {file_name}: {err}"
            ))),
        }
    }

    fn manages(&self, url: &str) -> bool {
        self.file_name_for(url).is_some()
    }
}
