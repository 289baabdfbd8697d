//! Catalog API client for product retrieval.
//!
//! This module provides the HTTP client for the read-only product list
//! endpoint. Retrieval is the only network operation in the application;
//! everything downstream of it is pure state derivation.

use crate::models::Product;
use reqwest::Client;

/// Default product list endpoint.
pub const DEFAULT_API_URL: &str = "https://api.escuelajs.co/api/v1/products";

/// Environment variable overriding the product list endpoint.
pub const API_URL_ENV: &str = "SHOPDECK_API_URL";

/// Error type for catalog retrieval operations
#[derive(Debug)]
pub enum TransportError {
    /// HTTP request failed (connection, DNS, TLS, ...)
    Http(reqwest::Error),
    /// Server returned a non-success status
    Status { status: u16, message: String },
    /// Response body failed to decode as a product list
    Json(serde_json::Error),
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::Http(e) => write!(f, "HTTP error: {}", e),
            TransportError::Status { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            TransportError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Http(e) => Some(e),
            TransportError::Json(e) => Some(e),
            TransportError::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        TransportError::Http(e)
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        TransportError::Json(e)
    }
}

/// Client for the product catalog endpoint.
///
/// Cheap to clone; the underlying reqwest client is shared.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /// Full URL of the product list endpoint
    pub url: String,
    /// Reusable HTTP client
    client: Client,
}

impl CatalogClient {
    /// Create a client for the default endpoint, honoring the
    /// `SHOPDECK_API_URL` environment override.
    pub fn new() -> Self {
        let url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_url(url)
    }

    /// Create a client for a specific endpoint URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }

    /// Fetch the full product list.
    ///
    /// # Returns
    /// All records from the endpoint, or a `TransportError` on network
    /// failure, non-2xx status, or a malformed body.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, TransportError> {
        tracing::debug!(url = %self.url, "fetching products");

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TransportError::Status { status, message });
        }

        let body = response.bytes().await?;
        let products: Vec<Product> = serde_json::from_slice(&body)?;

        tracing::info!(count = products.len(), "product list loaded");
        Ok(products)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Status {
            status: 500,
            message: "Internal Error".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (500): Internal Error");

        let json_err = serde_json::from_str::<Vec<Product>>("not json").unwrap_err();
        let err: TransportError = json_err.into();
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_transport_error_source() {
        let json_err = serde_json::from_str::<Vec<Product>>("[").unwrap_err();
        let err = TransportError::Json(json_err);
        assert!(std::error::Error::source(&err).is_some());

        let err = TransportError::Status {
            status: 404,
            message: "missing".to_string(),
        };
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_client_with_url() {
        let client = CatalogClient::with_url("http://localhost:9999/products");
        assert_eq!(client.url, "http://localhost:9999/products");
    }
}
