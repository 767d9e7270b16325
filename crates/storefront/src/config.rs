//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `GREENGROCER_CATALOG_URL` - HTTP(S) endpoint returning the product
//!   catalog as a JSON array
//!
//! ## Optional
//! - `GREENGROCER_STORAGE_DIR` - Directory for persisted cart snapshots
//!   (default: `.greengrocer`)
//! - `RUST_LOG` - Tracing filter (default: `greengrocer_storefront=info`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Fixed catalog endpoint.
    pub catalog_url: Url,
    /// Directory holding the persisted cart snapshot.
    pub storage_dir: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw_url = get_required_env("GREENGROCER_CATALOG_URL")?;
        let catalog_url = parse_catalog_url("GREENGROCER_CATALOG_URL", &raw_url)?;
        let storage_dir =
            PathBuf::from(get_env_or_default("GREENGROCER_STORAGE_DIR", ".greengrocer"));

        Ok(Self {
            catalog_url,
            storage_dir,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse and validate the catalog endpoint URL.
fn parse_catalog_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme `{}`", url.scheme()),
        ));
    }

    Ok(url)
}
