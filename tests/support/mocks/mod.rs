// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assets;
pub mod blog_repo;
pub mod category_repo;
pub mod time;

pub use assets::{ASSET_BASE_URL, RecordingAssetStore};
pub use blog_repo::InMemoryBlogRepo;
pub use category_repo::InMemoryCategoryRepo;
pub use time::{FixedClock, fixed_now};
