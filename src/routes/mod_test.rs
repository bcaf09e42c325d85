//! Tests for the static router.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::static_routes;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn healthz_returns_ok_with_empty_body() {
    let dir = tempfile::tempdir().unwrap();
    let resp = static_routes(dir.path()).oneshot(get("/healthz")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn public_file_is_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("robots.txt"), "User-agent: *\n").unwrap();

    let resp = static_routes(dir.path()).oneshot(get("/robots.txt")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"User-agent: *\n");
}

#[tokio::test]
async fn missing_public_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let resp = static_routes(dir.path()).oneshot(get("/yashpp.jpg")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn parent_traversal_is_rejected() {
    let root = tempfile::tempdir().unwrap();
    let public = root.path().join("public");
    std::fs::create_dir(&public).unwrap();
    std::fs::write(root.path().join("secret.txt"), "nope").unwrap();

    let resp = static_routes(&public).oneshot(get("/../secret.txt")).await.unwrap();
    assert_ne!(resp.status(), StatusCode::OK);
}
