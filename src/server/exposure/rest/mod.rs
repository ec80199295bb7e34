//! REST API exposure for the storefront
//!
//! The REST exposure consumes a `ServerHost` and produces an Axum `Router`
//! with health checks, a resource index, every catalog's list routes and a
//! JSON 404 fallback.

use super::super::host::ServerHost;
use crate::core::error::{RequestError, StorefrontError};
use crate::core::filter::SortOptionInfo;
use anyhow::Result;
use axum::http::Uri;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

/// One entry of the `GET /api` index
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub resource: String,
    pub href: String,
    pub sort_options: Vec<SortOptionInfo>,
}

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a fully configured Axum router with:
    /// - Health check routes
    /// - The catalog index
    /// - List routes of every registered catalog
    /// - Custom routes
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let health_routes = Self::health_routes();
        let index_routes = Self::index_routes(&host);
        let catalog_routes = host.catalogs.build_routes(host.config.listing);

        let mut app = health_routes.merge(index_routes).merge(catalog_routes);

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app
            .fallback(Self::not_found)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()))
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "storefront"
        }))
    }

    /// `GET /api` lists the registered catalogs
    fn index_routes(host: &ServerHost) -> Router {
        let summaries: Vec<CatalogSummary> = host
            .resources()
            .into_iter()
            .filter_map(|resource| host.catalogs.get(resource))
            .map(|catalog| CatalogSummary {
                resource: catalog.resource().to_string(),
                href: format!("/api/{}", catalog.resource()),
                sort_options: catalog.sort_options(),
            })
            .collect();
        let summaries = Arc::new(summaries);

        Router::new().route(
            "/api",
            get(move || {
                let summaries = summaries.clone();
                async move { Json(json!({ "catalogs": summaries.as_ref() })) }
            }),
        )
    }

    async fn not_found(uri: Uri) -> StorefrontError {
        RequestError::NotFound {
            path: uri.path().to_string(),
        }
        .into()
    }
}
