//! # Server Tests
//!
//! Drive the router in-process with `tower::ServiceExt::oneshot`.

use advisory_receipt::clock::FixedClock;
use advisory_receipt::server::{AppState, ServerConfig, router};
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use tower::ServiceExt;

fn app(config: ServerConfig) -> axum::Router {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 10, 15, 30).unwrap();
    router(Arc::new(AppState::with_clock(config, Arc::new(FixedClock(now)))))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let cache = response
        .headers()
        .get(header::CACHE_CONTROL)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, cache, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn root_renders_label() {
    let (status, cache, body) = get(app(ServerConfig::default()), "/?category=Fungal").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache.as_deref(), Some("no-store"));
    assert!(body.contains(r#"class="receipt label""#));
    assert!(body.contains("size: 80mm 120mm;"));
    assert!(body.contains("Fungal"));
    assert!(body.contains("ID: 930000"));
    assert!(body.contains("window.print()"));
}

#[tokio::test]
async fn label_route() {
    let (status, _, body) = get(app(ServerConfig::default()), "/receipt/label").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"class="receipt label""#));
}

#[tokio::test]
async fn roll_route() {
    let (status, _, body) = get(
        app(ServerConfig::default()),
        "/receipt/roll?receipt_id=KIOSK-7-000123&notes_te=one%0Atwo",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"class="receipt roll""#));
    assert!(body.contains("size: 80mm auto;"));
    assert!(body.contains("ID: KIOSK-7-000123"));
    assert!(body.contains(r#"<div class="line te">one</div><div class="line te">two</div>"#));
}

#[tokio::test]
async fn preview_mode_has_no_print_script() {
    let config = ServerConfig {
        auto_print: false,
        ..Default::default()
    };
    let (_, _, body) = get(app(config), "/receipt/roll").await;
    assert!(!body.contains("window.print()"));
}

#[tokio::test]
async fn bad_input_still_renders() {
    let (status, _, body) = get(
        app(ServerConfig::default()),
        "/receipt/label?components=%5B%7B&stage=%E0%A4",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("treatment-table\""));
}

#[tokio::test]
async fn health() {
    let (status, _, body) = get(app(ServerConfig::default()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _, _) = get(app(ServerConfig::default()), "/receipt/a4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
