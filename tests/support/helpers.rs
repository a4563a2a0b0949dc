// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryBlogRepo, InMemoryCategoryRepo, RecordingAssetStore};
use axum::body;
use axum::http::StatusCode;
use blog_core::application::ports::assets::UploadPolicy;
use blog_core::application::services::ApplicationServices;
use blog_core::domain::category::CategoryId;
use blog_core::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// 既定で登録済みのカテゴリ
pub const CATEGORY_ID: &str = "6f1c7a52-3b1e-4c55-9a55-2c1f0f3d8e10";
pub const CATEGORY_TITLE: &str = "Engineering";

pub fn category_id() -> CategoryId {
    CategoryId(Uuid::parse_str(CATEGORY_ID).unwrap())
}

/// モック一式と、それを束ねたアプリケーションサービス
pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub blogs: Arc<InMemoryBlogRepo>,
    pub categories: Arc<InMemoryCategoryRepo>,
    pub assets: Arc<RecordingAssetStore>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_blogs(InMemoryBlogRepo::default())
    }

    pub fn with_blogs(blogs: InMemoryBlogRepo) -> Self {
        let blogs = Arc::new(blogs);
        let categories = Arc::new(InMemoryCategoryRepo::with(&[(category_id(), CATEGORY_TITLE)]));
        let assets = Arc::new(RecordingAssetStore::default());

        let services = Arc::new(ApplicationServices::new(
            blogs.clone(),
            blogs.clone(),
            categories.clone(),
            assets.clone(),
            Arc::new(FixedClock::default()),
            UploadPolicy::new(1024),
        ));

        Self {
            services,
            blogs,
            categories,
            assets,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router_with_rate_limiter(state, false)
    }
}

pub async fn make_test_router() -> axum::Router {
    TestContext::new().router()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is the failure envelope with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json = read_json(resp).await;
    assert_eq!(json["success"], Value::Bool(false));
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
