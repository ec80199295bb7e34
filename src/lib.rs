//! # Storefront
//!
//! Product-list engine for a motorcycle storefront: search, sort and
//! paginate catalog items, and keep the list state in the URL query string.
//!
//! ## Features
//!
//! - **Filter stage**: case-insensitive search over configured fields, then a stable sort
//! - **Pagination stage**: page slicing with clamped navigation
//! - **URL sync**: `page`, `sort`, `search` and `limit` round-trip through the query string
//! - **Pluggable sources**: in-memory or remote JSON endpoints behind one trait
//! - **Configuration-Based**: search fields and sort options can come from YAML
//! - **HTTP service**: every catalog gets `GET /api/{resource}` and its sort options
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront::prelude::*;
//! use std::sync::Arc;
//!
//! let config = Arc::new(product_filter_config());
//! let query = ListQuery::parse("?page=2&sort=Price%3A+Low+to+High&search=yamaha");
//! let view = ListView::from_query(config, demo_catalog(), &query, &ListingConfig::default());
//!
//! for product in view.page_items() {
//!     println!("{} {}", product.name, product.price);
//! }
//! println!("share: ?{}", view.query_string());
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        field::FieldValue,
        item::{FieldName, ListItem},
        source::ListSource,
    };

    // === List Pipeline ===
    pub use crate::core::{
        filter::{
            FilterConfig, FilterState, SortDirection, SortKind, SortOption, SortOptionInfo,
            filter_items,
        },
        list_view::{ListLinks, ListSnapshot, ListView},
        pagination::{Page, PaginationState, Paginator, paginate, total_pages},
        query::{ListQuery, PaginationMeta},
    };

    // === Notifications ===
    pub use crate::core::notify::{Toast, ToastLevel, ToastQueue, load_items, report};

    // === Errors ===
    pub use crate::core::error::{
        ConfigError, ErrorResponse, RequestError, SourceError, StorefrontError,
    };

    // === Configuration ===
    pub use crate::config::{
        CatalogConfig, ListingConfig, ServerConfig, SortOptionConfig, StorefrontConfig,
    };

    // === Macros ===
    pub use crate::list_fields;

    // === Entities ===
    pub use crate::entities::{
        Product, ProductCategory, ProductField, demo_catalog, product_filter_config,
    };

    // === Storage ===
    #[cfg(feature = "remote")]
    pub use crate::storage::HttpListSource;
    #[cfg(feature = "in-memory")]
    pub use crate::storage::InMemoryListSource;

    // === Server ===
    pub use crate::server::{
        Catalog, CatalogDescriptor, CatalogRegistry, RestExposure, ServerBuilder, ServerHost,
    };

    // === Common External Types ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{Value, json};
    pub use std::sync::Arc;
    pub use uuid::Uuid;
}
