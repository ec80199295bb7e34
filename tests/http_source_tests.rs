//! Tests for the remote list source against a local upstream server
//!
//! A throwaway axum app on an ephemeral port plays the product API.

#![cfg(feature = "remote")]

#[macro_use]
mod source_harness;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use axum_test::TestServer;
use serde_json::{Value, json};
use source_harness::*;
use storefront::prelude::*;
use tokio::net::TcpListener;

/// Start the upstream and return its base URL
async fn spawn_upstream() -> String {
    let products = serde_json::to_value(demo_catalog()).unwrap();
    let wrapped = json!({ "data": products.clone(), "total": 12 });

    let app = Router::new()
        .route("/plain", get(move || async move { Json(products) }))
        .route("/wrapped", get(move || async move { Json(wrapped) }))
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/scalar", get(|| async { Json(json!(42)) }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Serve `items` as a bare JSON array and point a source at it
async fn make_source(items: Vec<TestItem>) -> HttpListSource<TestItem> {
    let app = Router::new().route("/test_items", get(move || async move { Json(items) }));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    HttpListSource::new(format!("http://{}/test_items", addr))
}

list_source_tests!(make_source);

#[tokio::test]
async fn test_fetch_plain_array() {
    let base = spawn_upstream().await;
    let source = HttpListSource::<Product>::new(format!("{}/plain", base));

    let items = source.fetch_all().await.unwrap();
    assert_eq!(items.len(), 12);
    assert_eq!(items[0].name, "Tenere 700");
}

#[tokio::test]
async fn test_fetch_wrapped_array() {
    let base = spawn_upstream().await;
    let source = HttpListSource::<Product>::new(format!("{}/wrapped", base));

    let items = source.fetch_all().await.unwrap();
    assert_eq!(items.len(), 12);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let base = spawn_upstream().await;
    let source = HttpListSource::<Product>::new(format!("{}/broken", base));

    let err = source.fetch_all().await.unwrap_err();
    assert!(matches!(err, SourceError::Status { status: 500, .. }));
    assert_eq!(err.resource(), "products");
}

#[tokio::test]
async fn test_non_list_body_is_a_decode_error() {
    let base = spawn_upstream().await;
    let source = HttpListSource::<Product>::new(format!("{}/scalar", base));

    let err = source.fetch_all().await.unwrap_err();
    assert_eq!(err.error_code(), "SOURCE_DECODE_ERROR");
}

#[tokio::test]
async fn test_unreachable_upstream() {
    // bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpListSource::<Product>::new(format!("http://{}/plain", addr));
    let err = source.fetch_all().await.unwrap_err();
    assert_eq!(err.error_code(), "SOURCE_UNREACHABLE");
}

#[tokio::test]
async fn test_load_items_turns_failure_into_toast() {
    let base = spawn_upstream().await;
    let mut toasts = ToastQueue::new();

    let ok = load_items(
        &HttpListSource::<Product>::new(format!("{}/plain", base)),
        &mut toasts,
    )
    .await;
    assert_eq!(ok.len(), 12);
    assert!(toasts.is_empty());

    let failed = load_items(
        &HttpListSource::<Product>::new(format!("{}/broken", base)),
        &mut toasts,
    )
    .await;
    assert!(failed.is_empty());
    assert_eq!(toasts.len(), 1);

    let toast = toasts.active(std::time::Instant::now()).next().unwrap();
    assert_eq!(toast.level, ToastLevel::Error);
    assert!(toast.message.contains("500"));
}

#[tokio::test]
async fn test_catalog_backed_by_remote_source() {
    let base = spawn_upstream().await;
    let router = ServerBuilder::new()
        .register_catalog(Catalog::new(
            product_filter_config(),
            HttpListSource::<Product>::new(format!("{}/wrapped", base)),
        ))
        .build()
        .unwrap();
    let server = TestServer::new(router).unwrap();

    let body: Value = server
        .get("/api/products")
        .add_query_param("search", "honda")
        .await
        .json();
    assert_eq!(body["data"][0]["name"], "Africa Twin");
    assert_eq!(body["pagination"]["total"], 1);
}
