//! Catalog registry for managing catalog descriptors and auto-generating list routes

use crate::config::{ListingConfig, StorefrontConfig};
use crate::core::error::ConfigError;
use crate::core::filter::SortOptionInfo;
use axum::Router;
use std::collections::HashMap;

/// Trait that describes how to build routes for a catalog
///
/// Each listable resource (products, parts, ...) provides its list routes
/// through this trait. See [`Catalog`](super::catalog::Catalog).
pub trait CatalogDescriptor: Send + Sync {
    /// The resource name used in URLs (e.g., "products")
    fn resource(&self) -> &str;

    /// The sort options offered for this resource
    fn sort_options(&self) -> Vec<SortOptionInfo>;

    /// Apply the configuration file's section for this resource, if any
    fn apply_config(&mut self, config: &StorefrontConfig) -> Result<(), ConfigError>;

    /// Build the list routes for this resource
    ///
    /// Should return a Router with routes like:
    /// - GET /api/{resource}
    /// - GET /api/{resource}/sort-options
    fn build_routes(&self, listing: ListingConfig) -> Router;
}

/// Registry for all catalogs in the application
#[derive(Default)]
pub struct CatalogRegistry {
    descriptors: HashMap<String, Box<dyn CatalogDescriptor>>,
}

impl CatalogRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: HashMap::new(),
        }
    }

    /// Register a catalog descriptor
    ///
    /// The resource name is used as the key; registering the same resource
    /// twice replaces the earlier descriptor.
    pub fn register(&mut self, descriptor: Box<dyn CatalogDescriptor>) {
        let resource = descriptor.resource().to_string();
        if self.descriptors.insert(resource.clone(), descriptor).is_some() {
            tracing::warn!(resource = %resource, "catalog registered twice, keeping the last one");
        }
    }

    /// Apply the configuration to every registered catalog
    pub fn apply_config(&mut self, config: &StorefrontConfig) -> Result<(), ConfigError> {
        for descriptor in self.descriptors.values_mut() {
            descriptor.apply_config(config)?;
        }
        Ok(())
    }

    /// Build a router with all registered catalog routes
    pub fn build_routes(&self, listing: ListingConfig) -> Router {
        let mut router = Router::new();

        for descriptor in self.descriptors.values() {
            router = router.merge(descriptor.build_routes(listing));
        }

        router
    }

    pub fn get(&self, resource: &str) -> Option<&dyn CatalogDescriptor> {
        self.descriptors.get(resource).map(|d| d.as_ref())
    }

    /// Get all registered resource names, sorted
    pub fn resources(&self) -> Vec<&str> {
        let mut resources: Vec<&str> = self.descriptors.keys().map(|s| s.as_str()).collect();
        resources.sort_unstable();
        resources
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
