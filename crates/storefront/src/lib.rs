//! Greengrocer Storefront library.
//!
//! This crate provides the storefront cart engine as a library, allowing it
//! to be tested and reused. The rendering layer, catalog transport, and
//! payment acknowledgment UI are external collaborators: rendering hangs off
//! the [`cart::CartListener`] seam, the catalog is a plain JSON endpoint
//! consumed by [`catalog::CatalogClient`], and payment acknowledgment is the
//! caller's interpretation of [`checkout::PaymentOutcome`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod session;
pub mod storage;
