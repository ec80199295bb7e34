//! HTTP-level tests for the catalog service
//!
//! Query string → handler → ListSource → ListView → JSON body.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;
use storefront::prelude::*;

/// A source whose upstream always answers 503
struct FailingSource;

#[async_trait]
impl ListSource<Product> for FailingSource {
    async fn fetch_all(&self) -> Result<Vec<Product>, SourceError> {
        Err(SourceError::Status {
            resource: "products".to_string(),
            status: 503,
        })
    }
}

fn make_server(config: StorefrontConfig) -> TestServer {
    let router = ServerBuilder::new()
        .with_config(config)
        .register_catalog(Catalog::new(
            product_filter_config(),
            InMemoryListSource::with_items(demo_catalog()),
        ))
        .build()
        .unwrap();
    TestServer::new(router).unwrap()
}

fn names(body: &Value) -> Vec<&str> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect()
}

// =============================================================================
// Health and index
// =============================================================================

#[tokio::test]
async fn test_health_routes() {
    let server = make_server(StorefrontConfig::default());

    for path in ["/health", "/healthz"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "storefront");
    }
}

#[tokio::test]
async fn test_catalog_index() {
    let server = make_server(StorefrontConfig::default());

    let body: Value = server.get("/api").await.json();
    let catalogs = body["catalogs"].as_array().unwrap();
    assert_eq!(catalogs.len(), 1);
    assert_eq!(catalogs[0]["resource"], "products");
    assert_eq!(catalogs[0]["href"], "/api/products");
}

#[tokio::test]
async fn test_unknown_path_returns_json_404() {
    let server = make_server(StorefrontConfig::default());

    let response = server.get("/api/banners").await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(body["details"]["path"], "/api/banners");
}

// =============================================================================
// List route
// =============================================================================

#[tokio::test]
async fn test_list_defaults() {
    let server = make_server(StorefrontConfig::default());

    let response = server.get("/api/products").await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 10);
    assert_eq!(body["pagination"]["total"], 12);
    assert_eq!(body["pagination"]["total_pages"], 2);
    assert_eq!(body["pagination"]["has_next"], true);
    assert_eq!(body["pagination"]["has_prev"], false);
    assert_eq!(body["sort"], "Name: A-Z");
    assert_eq!(body["search"], "");
    assert_eq!(body["empty"], false);
    assert_eq!(body["query"], "page=1&sort=Name%3A+A-Z");
    assert_eq!(body["links"]["next"], "page=2&sort=Name%3A+A-Z");
    assert_eq!(body["sort_options"].as_array().unwrap().len(), 7);
    assert_eq!(names(&body)[0], "390 Duke");
}

#[tokio::test]
async fn test_list_search_sort_and_page() {
    let server = make_server(StorefrontConfig::default());

    let body: Value = server
        .get("/api/products")
        .add_query_param("search", "motorcycle")
        .add_query_param("sort", "Price: High to Low")
        .add_query_param("limit", "3")
        .add_query_param("page", "2")
        .await
        .json();

    assert_eq!(names(&body), vec!["390 Duke"]);
    assert_eq!(body["pagination"]["total"], 4);
    assert_eq!(body["pagination"]["total_pages"], 2);
    assert_eq!(
        body["links"]["prev"],
        "page=1&sort=Price%3A+High+to+Low&search=motorcycle&limit=3"
    );
    assert!(body["links"].get("next").is_none());
}

#[tokio::test]
async fn test_list_without_matches_is_empty() {
    let server = make_server(StorefrontConfig::default());

    let body: Value = server
        .get("/api/products")
        .add_query_param("search", "zzz-no-match")
        .await
        .json();

    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["empty"], true);
    assert_eq!(body["pagination"]["total_pages"], 1);
    assert_eq!(body["links"]["reset"], "page=1&sort=Name%3A+A-Z");
}

#[tokio::test]
async fn test_list_bad_parameters_fall_back() {
    let server = make_server(StorefrontConfig::default());

    let response = server
        .get("/api/products")
        .add_query_param("page", "-4")
        .add_query_param("sort", "Most Popular")
        .add_query_param("limit", "0")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 10);
    assert_eq!(body["sort"], "Name: A-Z");
}

#[tokio::test]
async fn test_list_uses_configured_page_size() {
    let mut config = StorefrontConfig::default();
    config.listing.items_per_page = 5;
    let server = make_server(config);

    let body: Value = server.get("/api/products").await.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["pagination"]["total_pages"], 3);
}

#[tokio::test]
async fn test_sort_options_route() {
    let server = make_server(StorefrontConfig::default());

    let response = server.get("/api/products/sort-options").await;
    response.assert_status_ok();
    let options: Vec<Value> = response.json();

    assert_eq!(options.len(), 7);
    assert_eq!(options[0]["value"], "Name: A-Z");
    assert_eq!(options[0]["type"], "string");
    assert_eq!(options[6]["value"], "In Stock First");
    assert_eq!(options[6]["custom"], true);
}

#[tokio::test]
async fn test_catalog_config_from_yaml() {
    let config = StorefrontConfig::from_yaml_str(
        r#"
catalogs:
  - resource: products
    search_fields: [brand]
    sort_options:
      - value: "Cheapest"
        field: price
        type: number
        direction: asc
"#,
    )
    .unwrap();
    let server = make_server(config);

    // "part" is a category, not a brand
    let body: Value = server
        .get("/api/products")
        .add_query_param("search", "part")
        .await
        .json();
    assert_eq!(body["empty"], true);

    let body: Value = server
        .get("/api/products")
        .add_query_param("search", "yamaha")
        .await
        .json();
    assert_eq!(body["sort"], "Cheapest");
    assert_eq!(names(&body), vec!["MT-07", "Tenere 700"]);
}

// =============================================================================
// Source failures
// =============================================================================

#[tokio::test]
async fn test_failing_source_returns_502() {
    let router = ServerBuilder::new()
        .register_catalog(Catalog::new(product_filter_config(), FailingSource))
        .build()
        .unwrap();
    let server = TestServer::new(router).unwrap();

    let response = server.get("/api/products").await;
    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["code"], "SOURCE_STATUS");
    assert_eq!(body["details"]["upstream_status"], 503);

    // the sort dropdown does not need the source
    server.get("/api/products/sort-options").await.assert_status_ok();
}

#[tokio::test]
async fn test_items_added_to_source_show_up() {
    let source = Arc::new(InMemoryListSource::<Product>::new());
    let router = ServerBuilder::new()
        .register_catalog(Catalog::new(product_filter_config(), source.clone()))
        .build()
        .unwrap();
    let server = TestServer::new(router).unwrap();

    let body: Value = server.get("/api/products").await.json();
    assert_eq!(body["empty"], true);

    source
        .insert(Product::new("Tail Tidy", "R&G", ProductCategory::Part, 89.0, 3))
        .unwrap();

    let body: Value = server.get("/api/products").await.json();
    assert_eq!(names(&body), vec!["Tail Tidy"]);
}
