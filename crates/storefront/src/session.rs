//! Session bootstrap.
//!
//! Startup order is fixed: load the catalog, then rehydrate the cart from
//! the persisted snapshot. Rehydration runs only after a successful catalog
//! load, never before the fetch resolves. A failed fetch degrades to an
//! empty product list and an empty (un-rehydrated) cart; the snapshot is
//! left untouched on disk for the next session.

use tracing::{error, info};

use greengrocer_core::Product;

use crate::cart::{CartListener, CartStore};
use crate::catalog::CatalogClient;
use crate::storage::SnapshotStore;

/// A live storefront session: the validated catalog plus the cart store.
pub struct Session<S: SnapshotStore> {
    /// Products that passed validation, in catalog order.
    pub products: Vec<Product>,
    /// The rehydrated cart.
    pub cart: CartStore<S>,
}

/// Run the startup sequence and hand back a ready session.
pub async fn start<S: SnapshotStore>(
    catalog: &CatalogClient,
    storage: S,
    listener: Option<Box<dyn CartListener>>,
) -> Session<S> {
    let mut cart = match listener {
        Some(listener) => CartStore::with_listener(storage, listener),
        None => CartStore::new(storage),
    };

    let products = match catalog.load_catalog().await {
        Ok(products) => {
            cart.rehydrate();
            products
        }
        Err(e) => {
            error!(error = %e, "catalog load failed, displaying empty catalog");
            Vec::new()
        }
    };

    info!(
        products = products.len(),
        cart_lines = cart.len(),
        "session ready"
    );

    Session { products, cart }
}
