// tests/test_image_proxy.rs


use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::routing::get;
use axum::Router;

use adgenius::agents::AdPipeline;
use adgenius::config::AdConfig;
use test_helpers::{app_with, demo_app, get_json, send};

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Local stand-in for an image CDN; returns its base URL
async fn spawn_image_host() -> String {
    let upstream = Router::new().route(
        "/img.png",
        get(|| async { ([(header::CONTENT_TYPE, "image/png")], PNG_BYTES) }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });
    format!("http://{addr}")
}

fn local_config() -> AdConfig {
    AdConfig {
        allowed_image_domains: vec!["127.0.0.1".to_string()],
        ..AdConfig::default()
    }
}

#[tokio::test]
async fn test_missing_url() {
    let app = demo_app();
    let (status, body) = get_json(&app, "/api/download-image").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "url parameter required");
}

#[tokio::test]
async fn test_domain_not_allowed() {
    let app = demo_app();
    let (status, body) = get_json(
        &app,
        "/api/download-image?url=https%3A%2F%2Fevil.example.com%2Fx.jpg",
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Image domain not allowed");
}

#[tokio::test]
async fn test_proxies_allowlisted_image() {
    let base = spawn_image_host().await;
    let app = app_with(local_config(), AdPipeline::demo());

    let uri = format!(
        "/api/download-image?url={}/img.png&filename=aero-1.png",
        base
    );
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::CONTENT_TYPE], "image/png");
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"aero-1.png\""
    );
    assert_eq!(headers[header::CACHE_CONTROL], "no-cache");

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], PNG_BYTES);
}

#[tokio::test]
async fn test_upstream_failure_is_500() {
    let base = spawn_image_host().await;
    let app = app_with(local_config(), AdPipeline::demo());

    let request = Request::builder()
        .uri(format!("/api/download-image?url={base}/missing.png"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().starts_with("Failed to fetch image"));
}
