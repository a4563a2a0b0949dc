use axum::body::Body;
use axum::http::{Method, Request};
use blog_core::presentation::http::openapi::docs_router;
use tower::ServiceExt; // for oneshot

mod support;

#[tokio::test]
async fn docs_router_serves_openapi_json() {
    let app = docs_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), 200);
    let doc = support::read_json(resp).await;
    assert!(doc["paths"]["/api/v1/blogs"]["post"].is_object());
    assert!(doc["components"]["schemas"]["BlogDto"].is_object());
}

#[tokio::test]
async fn root_redirects_to_swagger_ui() {
    let app = support::make_test_router().await;

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), 308);
    assert_eq!(resp.headers()["location"], "/docs");
}
