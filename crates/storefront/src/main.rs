//! Greengrocer Storefront - cart engine session runner.
//!
//! Boots a storefront session: loads configuration, fetches and validates
//! the product catalog, rehydrates the cart from its persisted snapshot, and
//! logs a summary. The rendering layer drives the cart store from here; this
//! binary carries no UI of its own.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greengrocer_storefront::catalog::CatalogClient;
use greengrocer_storefront::config::StorefrontConfig;
use greengrocer_storefront::session;
use greengrocer_storefront::storage::FileStore;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "greengrocer_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let storage =
        FileStore::open(&config.storage_dir).expect("Failed to open cart snapshot storage");
    let catalog = CatalogClient::new(config.catalog_url.clone());

    let session = session::start(&catalog, storage, None).await;

    tracing::info!(
        products = session.products.len(),
        cart_lines = session.cart.len(),
        total = %session.cart.total(),
        "storefront session started"
    );
}
