//! Storefront catalog service
//!
//! Serves the product list with search, sort and pagination driven by the
//! query string:
//!
//! ```text
//! GET /api/products?page=2&sort=Price%3A+Low+to+High&search=yamaha&limit=5
//! ```
//!
//! Environment:
//! - `STOREFRONT_CONFIG`: optional YAML configuration file
//! - `STOREFRONT_SEED`: optional JSON file holding an array of products
//! - `RUST_LOG`: log filter (default `storefront=info,tower_http=info`)

use anyhow::{Context, Result};
use storefront::prelude::*;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "STOREFRONT_CONFIG";
const SEED_ENV: &str = "STOREFRONT_SEED";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("storefront=info,tower_http=info")),
        )
        .init();

    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => {
            tracing::info!(path = %path, "loading configuration");
            StorefrontConfig::from_yaml_file(&path)?
        }
        Err(_) => StorefrontConfig::default(),
    };

    let products = load_seed()?;
    tracing::info!(count = products.len(), "product catalog seeded");

    let addr = config.server.address();
    println!("🚀 Starting storefront v{}", env!("CARGO_PKG_VERSION"));
    println!("\n🌐 Server running on http://{}", addr);
    println!("\n  🔷 List Routes:");
    println!("    GET    /api                             - Registered catalogs");
    println!("    GET    /api/products                    - Filtered, sorted, paginated products");
    println!("    GET    /api/products/sort-options       - Sort dropdown entries");
    println!("\n  🩺 Health:");
    println!("    GET    /health");

    ServerBuilder::new()
        .with_config(config)
        .register_catalog(Catalog::new(
            product_filter_config(),
            InMemoryListSource::with_items(products),
        ))
        .serve_configured()
        .await
}

/// Products from `STOREFRONT_SEED`, or the demo catalog
fn load_seed() -> Result<Vec<Product>> {
    let Ok(path) = std::env::var(SEED_ENV) else {
        return Ok(demo_catalog());
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read seed file {}", path))?;
    let products: Vec<Product> = serde_json::from_str(&content)
        .with_context(|| format!("seed file {} is not a JSON array of products", path))?;
    Ok(products)
}
