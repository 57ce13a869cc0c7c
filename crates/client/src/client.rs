use reqwest::header::CACHE_CONTROL;
use serde::{Deserialize, Serialize};

use shopfront_products::Product;

/// Body of `GET /api/products`.
///
/// A missing `products` key reads as an empty segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductsEnvelope {
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// HTTP client for the mock catalog endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url.trim_end_matches('/'))
    }

    /// Fetch the remote catalog segment, bypassing caches.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let url = self.products_url();
        tracing::debug!(%url, "fetching remote catalog");

        let resp = self
            .http
            .get(&url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FetchError::Api(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        let envelope: ProductsEnvelope = resp
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        Ok(envelope.products)
    }
}
