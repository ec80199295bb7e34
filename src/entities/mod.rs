//! Item types listed by the storefront

pub mod macros;
pub mod product;

pub use product::{Product, ProductCategory, ProductField, demo_catalog, product_filter_config};
