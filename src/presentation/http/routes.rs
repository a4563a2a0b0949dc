// src/presentation/http/routes.rs
use crate::application::ports::assets::DEFAULT_MAX_UPLOAD_BYTES;
use crate::config::{AppConfig, RateLimitSettings};
use crate::presentation::http::controllers::blogs;
use crate::presentation::http::middleware::rate_limit::rate_limit_layer;
use crate::presentation::http::openapi::{self, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::get,
};
use std::{path::PathBuf, time::Duration};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Room for multipart boundaries and text fields on top of the image itself.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct RouterOptions {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
    pub rate_limit: Option<RateLimitSettings>,
    /// Directory served under `/uploads`.
    pub asset_dir: Option<PathBuf>,
    pub upload_max_bytes: usize,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            rate_limit: Some(RateLimitSettings::default()),
            asset_dir: None,
            upload_max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl RouterOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: Some(config.rate_limit()),
            asset_dir: Some(config.asset_root().to_path_buf()),
            upload_max_bytes: config.upload_max_bytes(),
        }
    }
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with_options(state, RouterOptions::default())
}

pub fn build_router_with_rate_limiter(state: HttpState, rate_limited: bool) -> Router {
    let options = RouterOptions {
        rate_limit: rate_limited.then(RateLimitSettings::default),
        ..RouterOptions::default()
    };
    build_router_with_options(state, options)
}

pub fn build_router_with_options(state: HttpState, options: RouterOptions) -> Router {
    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/v1/blogs",
            get(blogs::list_blogs).post(blogs::create_blog),
        )
        .route("/api/v1/blogs/slug/{slug}", get(blogs::get_blog_by_slug))
        .route(
            "/api/v1/blogs/category/{category_id}",
            get(blogs::list_blogs_by_category),
        )
        .route(
            "/api/v1/blogs/{id}",
            get(blogs::get_blog)
                .patch(blogs::update_blog)
                .put(blogs::update_blog)
                .delete(blogs::delete_blog),
        );

    if let Some(dir) = options.asset_dir.as_ref() {
        router = router.nest_service("/uploads", ServeDir::new(dir));
    }

    router = router
        .layer(DefaultBodyLimit::max(
            options.upload_max_bytes.saturating_add(FORM_OVERHEAD_BYTES),
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state));

    if let Some(settings) = options.rate_limit {
        match rate_limit_layer(settings) {
            Some(layer) => router = router.layer(layer),
            None => tracing::warn!(?settings, "invalid rate limit settings; limiter disabled"),
        }
    }

    router
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "skipping invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
