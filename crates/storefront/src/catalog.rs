//! Product catalog client.
//!
//! Fetches the catalog once at startup from a fixed JSON endpoint. Transport
//! and payload-shape failures surface as [`CatalogError`]; individually
//! malformed entries are dropped with a warning so one bad record cannot
//! block the rest of the catalog. There is no retry policy - a failed load
//! means an empty display.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use url::Url;

use greengrocer_core::Product;

/// Errors that can occur when loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("catalog endpoint returned HTTP {0}")]
    Status(u16),

    /// Response body is not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Response parsed but is not a JSON array.
    #[error("catalog payload is not a list")]
    NotAList,
}

/// Client for the product catalog endpoint.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: Url,
}

impl CatalogClient {
    /// Create a new catalog client for a fixed endpoint.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                endpoint,
            }),
        }
    }

    /// Fetch and validate the product catalog.
    ///
    /// Entries failing validation are dropped and logged as warnings, never
    /// surfaced as a hard error.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the request fails, the endpoint answers
    /// with a non-success status, or the payload is not a JSON array.
    #[instrument(skip(self))]
    pub async fn load_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .inner
            .client
            .get(self.inner.endpoint.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, "catalog endpoint returned non-success status");
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body)?;
        let Value::Array(entries) = payload else {
            return Err(CatalogError::NotAList);
        };

        let mut products = Vec::with_capacity(entries.len());
        for entry in &entries {
            match Product::from_value(entry) {
                Ok(product) => products.push(product),
                Err(e) => warn!(error = %e, entry = %entry, "dropping invalid catalog entry"),
            }
        }

        debug!(count = products.len(), "catalog loaded");
        Ok(products)
    }
}
