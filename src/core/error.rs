//! Typed error handling for the storefront
//!
//! Every fallible service call returns `Result<T, StorefrontError>`, so the
//! HTTP surface and the toast adapter ([`crate::core::notify::report`]) can
//! each turn errors into user-facing output in exactly one place.
//!
//! # Error Categories
//!
//! - [`SourceError`]: the remote list source could not deliver items
//! - [`ConfigError`]: configuration parsing and resolution
//! - [`RequestError`]: malformed or unroutable HTTP requests
//!
//! # Example
//!
//! ```rust,ignore
//! match source.fetch_all().await {
//!     Ok(items) => render(items),
//!     Err(SourceError::Status { status, .. }) => eprintln!("upstream said {status}"),
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for the storefront
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// List source errors
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP/Request errors
    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl StorefrontError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            StorefrontError::Source(e) => e.status_code(),
            StorefrontError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StorefrontError::Request(e) => e.status_code(),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            StorefrontError::Source(e) => e.error_code(),
            StorefrontError::Config(_) => "CONFIG_ERROR",
            StorefrontError::Request(e) => e.error_code(),
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            StorefrontError::Source(SourceError::Status { resource, status }) => {
                Some(serde_json::json!({
                    "resource": resource,
                    "upstream_status": status
                }))
            }
            StorefrontError::Config(ConfigError::UnknownField { item, field }) => {
                Some(serde_json::json!({ "item": item, "field": field }))
            }
            StorefrontError::Request(RequestError::NotFound { path }) => {
                Some(serde_json::json!({ "path": path }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(code = self.error_code(), error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Source Errors
// =============================================================================

/// Errors raised while fetching a list from its source
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source could not be reached
    #[error("Failed to fetch {resource}: {message}")]
    Transport { resource: String, message: String },

    /// The source answered with a non-success status
    #[error("Fetching {resource} failed with HTTP status {status}")]
    Status { resource: String, status: u16 },

    /// The response body was not a list of items
    #[error("Failed to decode {resource}: {message}")]
    Decode { resource: String, message: String },

    /// The source is temporarily unusable (e.g. a poisoned lock)
    #[error("{resource} source is unavailable: {message}")]
    Unavailable { resource: String, message: String },
}

impl SourceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SourceError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SourceError::Transport { .. } => "SOURCE_UNREACHABLE",
            SourceError::Status { .. } => "SOURCE_STATUS",
            SourceError::Decode { .. } => "SOURCE_DECODE_ERROR",
            SourceError::Unavailable { .. } => "SOURCE_UNAVAILABLE",
        }
    }

    /// The resource the failing source serves
    pub fn resource(&self) -> &str {
        match self {
            SourceError::Transport { resource, .. }
            | SourceError::Status { resource, .. }
            | SourceError::Decode { resource, .. }
            | SourceError::Unavailable { resource, .. } => resource,
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", .file.as_ref().map(|f| format!(" '{}'", f)).unwrap_or_default())]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// A field name that the item type does not declare
    #[error("Unknown field '{field}' for {item}")]
    UnknownField { item: String, field: String },
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP request handling
#[derive(Debug, Error)]
pub enum RequestError {
    /// No catalog or route is registered under this path
    #[error("No resource found at '{path}'")]
    NotFound { path: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::NotFound { .. } => "RESOURCE_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_status_maps_to_bad_gateway() {
        let err = StorefrontError::from(SourceError::Status {
            resource: "products".to_string(),
            status: 500,
        });
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.error_code(), "SOURCE_STATUS");

        let body = err.to_response();
        assert_eq!(body.details.unwrap()["upstream_status"], 500);
    }

    #[test]
    fn test_unavailable_maps_to_503() {
        let err = StorefrontError::from(SourceError::Unavailable {
            resource: "products".to_string(),
            message: "poisoned".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_config_parse_error_display() {
        let with_file = ConfigError::ParseError {
            file: Some("storefront.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert_eq!(
            with_file.to_string(),
            "Failed to parse config 'storefront.yaml': bad indent"
        );

        let without_file = ConfigError::ParseError {
            file: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(without_file.to_string(), "Failed to parse config: bad indent");
    }

    #[test]
    fn test_transparent_display() {
        let err = StorefrontError::from(RequestError::NotFound {
            path: "/api/bikes".to_string(),
        });
        assert_eq!(err.to_string(), "No resource found at '/api/bikes'");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
