//! ServerBuilder for fluent API to build HTTP servers

use super::catalog_registry::{CatalogDescriptor, CatalogRegistry};
use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::StorefrontConfig;
use anyhow::Result;
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating HTTP servers with auto-registered list routes
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(config)
///     .register_catalog(Catalog::new(product_filter_config(), source))
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: StorefrontConfig,
    catalogs: CatalogRegistry,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            config: StorefrontConfig::default(),
            catalogs: CatalogRegistry::new(),
            custom_routes: Vec::new(),
        }
    }

    /// Use the given configuration
    pub fn with_config(mut self, config: StorefrontConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the configuration from a YAML file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let config = StorefrontConfig::from_yaml_file(path)?;
        Ok(self.with_config(config))
    }

    /// Add custom routes to the server
    ///
    /// Use this for routes that are not catalog listings, such as
    /// a cart endpoint or a webhook.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Register a catalog
    pub fn register_catalog(mut self, catalog: impl CatalogDescriptor + 'static) -> Self {
        self.catalogs.register(Box::new(catalog));
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(self) -> Result<ServerHost> {
        if self.catalogs.is_empty() {
            tracing::warn!("no catalog registered, only health routes will be served");
        }
        ServerHost::from_builder_components(self.config, self.catalogs)
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Serve on the address from the configuration's `server` section
    pub async fn serve_configured(self) -> Result<()> {
        let addr = self.config.server.address();
        self.serve(&addr).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
