//! Greengrocer Core - Shared types library.
//!
//! This crate provides the domain types used across the Greengrocer
//! components:
//! - `storefront` - The cart engine and catalog client
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no HTTP
//! clients, no storage access. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products, cart line items, prices, and the boundary
//!   validation rules for each

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
