use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_base_route_is_not_found() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/api/auth/login").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_rejects_post() {
    let response = base_routes()
        .oneshot(Request::builder().method("POST").uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
