//! Integration tests for Greengrocer.
//!
//! # Test Categories
//!
//! - `catalog_load` - Catalog endpoint behavior against a stub HTTP server
//! - `cart_session` - Full cart lifecycles over file-backed storage,
//!   including reload round-trips
