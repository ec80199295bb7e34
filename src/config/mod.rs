//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::filter::{SortDirection, SortKind};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` for binding
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Page size settings shared by every list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Page size when the URL does not ask for one
    pub items_per_page: usize,

    /// Upper bound for a page size requested through `limit`
    pub max_items_per_page: usize,
}

impl ListingConfig {
    /// Effective page size for an optional requested size
    pub fn page_size(&self, requested: Option<usize>) -> usize {
        let max = self.max_items_per_page.max(1);
        match requested {
            Some(n) => n.clamp(1, max),
            None => self.items_per_page.clamp(1, max),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            items_per_page: 10,
            max_items_per_page: 100,
        }
    }
}

/// One sort option as written in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOptionConfig {
    /// Label written to the `sort` query parameter
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    #[serde(rename = "type", default)]
    pub kind: SortKind,

    #[serde(default)]
    pub direction: SortDirection,
}

/// Search and sort configuration of one catalog resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Resource name (e.g. "products")
    pub resource: String,

    #[serde(default)]
    pub search_fields: Vec<String>,

    #[serde(default)]
    pub sort_options: Vec<SortOptionConfig>,
}

/// Complete configuration of the storefront service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub server: ServerConfig,

    pub listing: ListingConfig,

    /// Per-resource overrides of the built-in filter configurations
    pub catalogs: Vec<CatalogConfig>,
}

impl StorefrontConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        let content = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.display().to_string()),
            message: e.to_string(),
        })?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        Ok(config)
    }

    /// Find the catalog section for a resource
    pub fn catalog(&self, resource: &str) -> Option<&CatalogConfig> {
        self.catalogs.iter().find(|c| c.resource == resource)
    }
}
