//! A catalog: one listable resource exposed over HTTP
//!
//! ```text
//! GET /api/{resource}?page=&sort=&search=&limit=   → rendered list view
//! GET /api/{resource}/sort-options                 → sort dropdown entries
//! ```

use super::catalog_registry::CatalogDescriptor;
use crate::config::{ListingConfig, StorefrontConfig};
use crate::core::error::{ConfigError, StorefrontError};
use crate::core::filter::{FilterConfig, SortOptionInfo};
use crate::core::item::ListItem;
use crate::core::list_view::{ListLinks, ListView};
use crate::core::query::{ListQuery, PaginationMeta};
use crate::core::source::ListSource;
use axum::Router;
use axum::extract::{RawQuery, State};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use serde::Serialize;
use std::sync::Arc;

/// Descriptor of a listable resource: its filter config and its source
pub struct Catalog<T: ListItem> {
    resource: String,
    config: Arc<FilterConfig<T>>,
    source: Arc<dyn ListSource<T>>,
}

impl<T: ListItem + Serialize> Catalog<T> {
    /// Catalog served under `T::resource_name()`
    pub fn new(config: FilterConfig<T>, source: impl ListSource<T> + 'static) -> Self {
        Self {
            resource: T::resource_name().to_string(),
            config: Arc::new(config),
            source: Arc::new(source),
        }
    }

    /// Serve under a different resource name
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    pub fn filter_config(&self) -> &FilterConfig<T> {
        &self.config
    }
}

impl<T: ListItem + Serialize> CatalogDescriptor for Catalog<T> {
    fn resource(&self) -> &str {
        &self.resource
    }

    fn sort_options(&self) -> Vec<SortOptionInfo> {
        self.config.sort_option_infos()
    }

    fn apply_config(&mut self, config: &StorefrontConfig) -> Result<(), ConfigError> {
        if let Some(catalog) = config.catalog(&self.resource) {
            self.config = Arc::new(FilterConfig::from_catalog(catalog)?);
            tracing::info!(resource = %self.resource, "filter configuration loaded from config file");
        }
        Ok(())
    }

    fn build_routes(&self, listing: ListingConfig) -> Router {
        let state = CatalogState {
            resource: Arc::from(self.resource.as_str()),
            config: self.config.clone(),
            source: self.source.clone(),
            listing,
        };

        Router::new()
            .route(&format!("/api/{}", self.resource), get(list_items::<T>))
            .route(
                &format!("/api/{}/sort-options", self.resource),
                get(sort_options::<T>),
            )
            .with_state(state)
    }
}

/// Per-catalog handler state
pub struct CatalogState<T: ListItem> {
    pub resource: Arc<str>,
    pub config: Arc<FilterConfig<T>>,
    pub source: Arc<dyn ListSource<T>>,
    pub listing: ListingConfig,
}

impl<T: ListItem> Clone for CatalogState<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
            config: self.config.clone(),
            source: self.source.clone(),
            listing: self.listing,
        }
    }
}

/// Body of `GET /api/{resource}`
#[derive(Debug, Serialize)]
pub struct ListResponse<'a, T> {
    /// Items on the current page
    pub data: Vec<&'a T>,
    pub pagination: PaginationMeta,
    pub sort: &'a str,
    pub search: &'a str,
    /// Nothing matched; clients offer `links.reset`
    pub empty: bool,
    /// Canonical query string of this view
    pub query: String,
    pub links: ListLinks,
    pub sort_options: Vec<SortOptionInfo>,
}

impl<'a, T: ListItem> ListResponse<'a, T> {
    pub fn from_view(view: &'a ListView<T>) -> Self {
        let filter = view.filter_state();
        Self {
            data: view.page_items(),
            pagination: PaginationMeta::from_paginator(view.pagination()),
            sort: &filter.sort_value,
            search: &filter.search_value,
            empty: view.is_empty_result(),
            query: view.query_string(),
            links: view.links(),
            sort_options: view.config().sort_option_infos(),
        }
    }
}

/// GET /api/{resource}: render a list view from the request's query string
async fn list_items<T: ListItem + Serialize>(
    State(state): State<CatalogState<T>>,
    RawQuery(raw): RawQuery,
) -> Result<Response, StorefrontError> {
    let query = ListQuery::parse(raw.as_deref().unwrap_or_default());
    let items = state.source.fetch_all().await?;

    let view = ListView::from_query(state.config.clone(), items, &query, &state.listing);
    tracing::debug!(
        resource = %state.resource,
        page = view.current_page(),
        total_pages = view.total_pages(),
        matched = view.pagination().item_count(),
        "list view rendered"
    );

    Ok(Json(ListResponse::from_view(&view)).into_response())
}

/// GET /api/{resource}/sort-options
async fn sort_options<T: ListItem + Serialize>(
    State(state): State<CatalogState<T>>,
) -> Json<Vec<SortOptionInfo>> {
    Json(state.config.sort_option_infos())
}
