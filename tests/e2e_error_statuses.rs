use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

use support::{BlogPostBuilder, CATEGORY_ID, InMemoryBlogRepo, TestContext, category_id};

fn post_json(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/v1/blogs")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// 存在しないスラグで 404 Not Found を返すことを確認する
#[tokio::test]
async fn e2e_get_blog_by_slug_not_found_returns_404() {
    let app = support::make_test_router().await;

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/blogs/slug/nonexistent")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// 画像なしの作成は 400 Bad Request
#[tokio::test]
async fn e2e_create_without_image_returns_400() {
    let app = support::make_test_router().await;

    let body = json!({
        "title": "No cover",
        "content": "Body",
        "readTimeMinutes": 3,
        "categoryId": CATEGORY_ID
    });
    let resp = app.oneshot(post_json(body)).await.unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

/// 未登録カテゴリでの作成は 404 Not Found
#[tokio::test]
async fn e2e_create_with_unknown_category_returns_404() {
    let app = support::make_test_router().await;

    let body = json!({
        "title": "Lost",
        "content": "Body",
        "readTimeMinutes": 3,
        "categoryId": "0b8e4d0e-8d53-4f0c-9d7e-5b0f2a9a7c11",
        "coverImage": "https://images.example.com/a.png"
    });
    let resp = app.oneshot(post_json(body)).await.unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// スラグ重複は 409 Conflict
#[tokio::test]
async fn e2e_duplicate_slug_returns_409() {
    let existing = BlogPostBuilder::new(category_id()).slug("taken").build();
    let app = TestContext::with_blogs(InMemoryBlogRepo::with_posts([existing])).router();

    let body = json!({
        "title": "Taken",
        "content": "Body",
        "readTimeMinutes": 3,
        "categoryId": CATEGORY_ID,
        "coverImage": "https://images.example.com/a.png"
    });
    let resp = app.oneshot(post_json(body)).await.unwrap();
    support::assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
}

/// 数値でない page は 400 Bad Request
#[tokio::test]
async fn e2e_non_numeric_page_returns_400() {
    let app = support::make_test_router().await;

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/blogs?page=abc")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

/// page=0 は 400 Bad Request
#[tokio::test]
async fn e2e_page_zero_returns_400() {
    let app = support::make_test_router().await;

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/blogs?page=0")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

/// 壊れた JSON 本文は 400 Bad Request
#[tokio::test]
async fn e2e_malformed_json_returns_400() {
    let app = support::make_test_router().await;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/blogs")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

/// 存在しない記事の削除は 404 Not Found
#[tokio::test]
async fn e2e_delete_unknown_returns_404() {
    let app = support::make_test_router().await;

    let req = Request::builder()
        .method(Method::DELETE)
        .uri("/api/v1/blogs/8a6e0804-2bd0-4672-b79d-d97027f9071a")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// アップロード失敗は 500 Internal Server Error で記事は残らない
#[tokio::test]
async fn e2e_upload_failure_returns_500() {
    let ctx = TestContext::new();
    ctx.assets.fail_store();
    let app = ctx.router();

    let boundary = "x-boundary";
    let mut body = Vec::new();
    for (name, value) in [
        ("title", "Broken upload"),
        ("content", "Body"),
        ("readTimeMinutes", "2"),
        ("categoryId", CATEGORY_ID),
    ] {
        body.extend_from_slice(
            format!("--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                .as_bytes(),
        );
    }
    body.extend_from_slice(
        format!("--{boundary}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"a.png\"\r\nContent-Type: image/png\r\n\r\nPNG\r\n--{boundary}--\r\n")
            .as_bytes(),
    );

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/blogs")
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={boundary}"))
        .body(Body::from(body))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        .await;
    assert_eq!(ctx.blogs.len(), 0);
}
