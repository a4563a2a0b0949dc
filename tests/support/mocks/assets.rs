// tests/support/mocks/assets.rs
use async_trait::async_trait;
use blog_core::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::assets::{AssetStore, ImageUpload},
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

pub const ASSET_BASE_URL: &str = "https://assets.test/covers/";

/// 保存と削除の呼び出しを記録するアセットストア
#[derive(Default)]
pub struct RecordingAssetStore {
    stored: Mutex<Vec<String>>,
    deleted: Mutex<Vec<String>>,
    fail_store: AtomicBool,
    fail_delete: AtomicBool,
}

impl RecordingAssetStore {
    /// 以降の保存をアップロードエラーで失敗させる
    pub fn fail_store(&self) {
        self.fail_store.store(true, Ordering::SeqCst);
    }

    /// 以降の削除を失敗させる（呼び出し自体は記録する）
    pub fn fail_delete(&self) {
        self.fail_delete.store(true, Ordering::SeqCst);
    }

    pub fn stored(&self) -> Vec<String> {
        self.stored.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetStore for RecordingAssetStore {
    async fn store(&self, upload: ImageUpload) -> ApplicationResult<String> {
        if self.fail_store.load(Ordering::SeqCst) {
            return Err(ApplicationError::upload("bucket unavailable"));
        }
        let mut stored = self.stored.lock().unwrap();
        let name = upload
            .file_name
            .unwrap_or_else(|| "cover.png".to_string());
        let url = format!("{ASSET_BASE_URL}{}-{name}", stored.len() + 1);
        stored.push(url.clone());
        Ok(url)
    }

    async fn delete(&self, url: &str) -> ApplicationResult<()> {
        self.deleted.lock().unwrap().push(url.to_string());
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(ApplicationError::infrastructure("bucket unavailable"));
        }
        Ok(())
    }

    fn manages(&self, url: &str) -> bool {
        url.starts_with(ASSET_BASE_URL)
    }
}
