//! Server host for transport-agnostic API exposure
//!
//! This module provides a `ServerHost` structure that contains everything
//! needed to expose the catalogs over HTTP: the loaded configuration and
//! the catalog registry.

use crate::config::StorefrontConfig;
use crate::server::catalog_registry::CatalogRegistry;
use anyhow::Result;
use std::sync::Arc;

/// Host context containing all storefront state
///
/// # Example
///
/// ```rust,ignore
/// let host = ServerHost::from_builder_components(config, catalogs)?;
/// let app = RestExposure::build_router(Arc::new(host), vec![])?;
/// ```
pub struct ServerHost {
    /// Loaded configuration (server, listing defaults, catalog overrides)
    pub config: Arc<StorefrontConfig>,

    /// Catalog registry for list routes
    pub catalogs: CatalogRegistry,
}

impl ServerHost {
    /// Build the host from builder components
    ///
    /// The configuration's catalog sections are applied to the registered
    /// catalogs here, so a bad field name in the config file fails the build.
    pub fn from_builder_components(
        config: StorefrontConfig,
        mut catalogs: CatalogRegistry,
    ) -> Result<Self> {
        catalogs.apply_config(&config)?;

        for section in &config.catalogs {
            if catalogs.get(&section.resource).is_none() {
                tracing::warn!(
                    resource = %section.resource,
                    "config section has no registered catalog"
                );
            }
        }

        Ok(Self {
            config: Arc::new(config),
            catalogs,
        })
    }

    /// Get resource names registered in the host
    pub fn resources(&self) -> Vec<&str> {
        self.catalogs.resources()
    }

    /// Check if at least one catalog is registered
    pub fn is_ready(&self) -> bool {
        !self.catalogs.is_empty()
    }
}
