//! Server module for building HTTP servers with auto-registered list routes
//!
//! This module provides a `ServerBuilder` that registers, for every catalog:
//! - `GET /api/{resource}` rendering a filtered, sorted, paginated list view
//! - `GET /api/{resource}/sort-options` for the sort dropdown

pub mod builder;
pub mod catalog;
pub mod catalog_registry;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use catalog::{Catalog, CatalogState, ListResponse};
pub use catalog_registry::{CatalogDescriptor, CatalogRegistry};
pub use exposure::RestExposure;
pub use host::ServerHost;
