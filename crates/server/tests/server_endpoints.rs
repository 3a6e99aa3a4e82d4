//! Smoke tests for the non-conversion endpoints.

mod common;

use axum::http::StatusCode;
use common::TestFixture;

#[tokio::test]
async fn test_health_endpoint() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_config_endpoint_returns_defaults() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/config").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["server"]["port"], 8080);
    assert_eq!(response.body["limits"]["max_body_bytes"], 50 * 1024 * 1024);
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_http_metrics() {
    let fixture = TestFixture::new();

    // Generate at least one sample first.
    fixture.get("/api/health").await;

    let response = fixture.get("/metrics").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("repix_http_requests_total"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/nope").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
