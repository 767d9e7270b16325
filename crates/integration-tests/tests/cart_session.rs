//! Integration tests for full cart lifecycles over file-backed storage.
//!
//! These exercise the persistence discipline end to end: every mutation
//! rewrites the snapshot, clear deletes it, and a fresh session rehydrates
//! an equal cart from whatever the previous session left on disk.

#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use mockito::Server;
use rust_decimal::Decimal;
use serde_json::json;
use url::Url;

use greengrocer_core::Price;
use greengrocer_storefront::cart::CartStore;
use greengrocer_storefront::catalog::CatalogClient;
use greengrocer_storefront::checkout::{PaymentOutcome, process_payment};
use greengrocer_storefront::session;
use greengrocer_storefront::storage::{FileStore, SnapshotStore, storage_keys};

fn snapshot_path(dir: &Path) -> std::path::PathBuf {
    dir.join(format!("{}.json", storage_keys::CART))
}

fn price(amount: f64) -> Price {
    Price::from_f64(amount).unwrap()
}

#[test]
fn oat_milk_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let mut cart = CartStore::new(FileStore::open(dir.path()).unwrap());

    // Cart = [{oat milk, 3.50, qty 2}]
    cart.add("oat milk", price(3.5));
    cart.add("oat milk", price(3.5));
    assert_eq!(cart.items()[0].quantity, 2);

    cart.increase_quantity("oat milk");
    assert_eq!(cart.items()[0].quantity, 3);
    assert_eq!(cart.total(), Decimal::new(1050, 2));

    cart.decrease_quantity("oat milk");
    assert_eq!(cart.items()[0].quantity, 2);
    assert!(snapshot_path(dir.path()).exists());

    cart.decrease_quantity("oat milk");
    cart.decrease_quantity("oat milk");
    assert!(cart.is_empty());
    assert_eq!(cart.total(), Decimal::ZERO);
    assert!(
        !snapshot_path(dir.path()).exists(),
        "the quantity 1 -> 0 transition removes the line and the snapshot key"
    );
}

#[test]
fn reload_roundtrip_reproduces_cart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut cart = CartStore::new(FileStore::open(dir.path()).unwrap());
        cart.add("oat milk", price(3.5));
        cart.add("sourdough", price(4.25));
        cart.add("oat milk", price(3.5));
    }

    // Simulated reload: a fresh store over the same directory.
    let mut cart = CartStore::new(FileStore::open(dir.path()).unwrap());
    cart.rehydrate();

    let lines: Vec<(&str, u32)> = cart
        .items()
        .iter()
        .map(|i| (i.name.as_str(), i.quantity))
        .collect();
    assert_eq!(lines, [("oat milk", 2), ("sourdough", 1)]);
    assert_eq!(cart.total(), Decimal::new(1125, 2));
}

#[test]
fn tampered_snapshot_rehydrates_survivors_only() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    fs::write(
        snapshot_path(dir.path()),
        json!([
            {"name": "oat milk", "price": 3.5, "quantity": 2},
            {"quantity": 1},
            {"name": "sourdough", "price": 4.25, "quantity": -3},
            "not even an object",
        ])
        .to_string(),
    )
    .unwrap();

    let mut cart = CartStore::new(store);
    cart.rehydrate();

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].name, "oat milk");
    assert_eq!(cart.total(), Decimal::new(700, 2));
}

#[test]
fn clear_deletes_snapshot_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut cart = CartStore::new(FileStore::open(dir.path()).unwrap());

    cart.add("apples", price(2.0));
    assert!(snapshot_path(dir.path()).exists());

    cart.clear();
    assert!(!snapshot_path(dir.path()).exists());
}

#[tokio::test]
async fn session_startup_loads_catalog_then_rehydrates() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/products")
        .with_status(200)
        .with_body(
            json!([
                {"name": "oat milk", "price": 3.5, "image": "oat-milk.png"},
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();

    // A previous session left a snapshot behind.
    let mut storage = FileStore::open(dir.path()).unwrap();
    storage
        .save(
            storage_keys::CART,
            &json!([{"name": "oat milk", "price": 3.5, "quantity": 2}]).to_string(),
        )
        .unwrap();

    let endpoint = Url::parse(&format!("{}/api/products", server.url())).unwrap();
    let catalog = CatalogClient::new(endpoint);
    let session = session::start(&catalog, storage, None).await;

    assert_eq!(session.products.len(), 1);
    assert_eq!(session.cart.len(), 1);
    assert_eq!(session.cart.total(), Decimal::new(700, 2));
}

#[tokio::test]
async fn catalog_outage_skips_rehydration_but_keeps_snapshot() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/products")
        .with_status(503)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStore::open(dir.path()).unwrap();
    storage
        .save(
            storage_keys::CART,
            &json!([{"name": "oat milk", "price": 3.5, "quantity": 1}]).to_string(),
        )
        .unwrap();

    let endpoint = Url::parse(&format!("{}/api/products", server.url())).unwrap();
    let catalog = CatalogClient::new(endpoint);
    let session = session::start(&catalog, storage, None).await;

    // Rehydration only runs after a successful catalog load, so the session
    // starts empty - but the snapshot stays on disk for the next one.
    assert!(session.products.is_empty());
    assert!(session.cart.is_empty());
    assert!(snapshot_path(dir.path()).exists());
}

#[test]
fn payment_clears_cart_and_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let mut cart = CartStore::new(FileStore::open(dir.path()).unwrap());

    assert_eq!(process_payment(&mut cart), PaymentOutcome::EmptyCart);

    cart.add("oat milk", price(3.5));
    assert_eq!(process_payment(&mut cart), PaymentOutcome::Confirmed);
    assert!(cart.is_empty());
    assert!(!snapshot_path(dir.path()).exists());
}
