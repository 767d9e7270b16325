//! Cart state machine with persistence and display notification.
//!
//! The cart is an insertion-ordered sequence of line items, unique by product
//! name. Every mutation is synchronous and terminates the same way: the total
//! is recomputed from the items (never tracked incrementally, so it cannot
//! drift), the snapshot is persisted, and the listener is notified.
//!
//! No mutation raises an error. Malformed persisted data degrades to
//! "ignore this entry" and a persistence failure is logged without undoing
//! the in-memory change: a broken disk must never make the cart unusable.

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::warn;

use greengrocer_core::{CartItem, Price};

use crate::storage::{SnapshotStore, storage_keys};

/// Display refresh callback, invoked with the ordered cart and the derived
/// total after every successful mutation and after rehydration.
///
/// The rendering layer is external; this seam is all the cart knows of it.
pub trait CartListener {
    /// The cart changed; redraw.
    fn cart_updated(&self, items: &[CartItem], total: Decimal);
}

/// Owner of the in-memory cart, the derived total, and the persistence
/// channel to durable storage.
///
/// Constructed at session start, driven by its mutation operations, torn
/// down at session end. All operations are total over every cart state:
/// operating on an absent item is a no-op, never an error.
pub struct CartStore<S: SnapshotStore> {
    items: Vec<CartItem>,
    total: Decimal,
    storage: S,
    listener: Option<Box<dyn CartListener>>,
}

impl<S: SnapshotStore> CartStore<S> {
    /// Create an empty cart store with no display listener.
    pub fn new(storage: S) -> Self {
        Self {
            items: Vec::new(),
            total: Decimal::ZERO,
            storage,
            listener: None,
        }
    }

    /// Create an empty cart store that notifies `listener` on every change.
    pub fn with_listener(storage: S, listener: Box<dyn CartListener>) -> Self {
        Self {
            listener: Some(listener),
            ..Self::new(storage)
        }
    }

    /// The ordered cart contents.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The derived total: sum of price x quantity over all lines.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add one unit of a product.
    ///
    /// If a line with this name already exists its quantity is incremented;
    /// otherwise a new line with quantity 1 is appended. The price is
    /// expected to come from a validated [`greengrocer_core::Product`].
    pub fn add(&mut self, name: &str, price: Price) {
        if let Some(item) = self.items.iter_mut().find(|i| i.name == name) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem {
                name: name.to_owned(),
                price,
                quantity: 1,
            });
        }
        self.commit();
    }

    /// Increment the quantity of an existing line. No-op if absent.
    pub fn increase_quantity(&mut self, name: &str) {
        if let Some(item) = self.items.iter_mut().find(|i| i.name == name) {
            item.quantity = item.quantity.saturating_add(1);
            self.commit();
        }
    }

    /// Decrement the quantity of an existing line.
    ///
    /// A line at quantity 1 is removed entirely rather than left at zero -
    /// the cart never contains a zero-quantity line. No-op if absent.
    pub fn decrease_quantity(&mut self, name: &str) {
        let Some(item) = self.items.iter_mut().find(|i| i.name == name) else {
            return;
        };

        if item.quantity > 1 {
            item.quantity -= 1;
            self.commit();
        } else {
            self.remove(name);
        }
    }

    /// Delete a line from the cart. No-op if absent.
    pub fn remove(&mut self, name: &str) {
        let before = self.items.len();
        self.items.retain(|i| i.name != name);
        if self.items.len() != before {
            self.commit();
        }
    }

    /// Empty the cart and delete the persisted snapshot.
    ///
    /// This is the only operation that removes the storage key instead of
    /// rewriting it.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = Decimal::ZERO;
        if let Err(e) = self.storage.remove(storage_keys::CART) {
            warn!(error = %e, "failed to delete cart snapshot");
        }
        self.notify();
    }

    // =========================================================================
    // Rehydration
    // =========================================================================

    /// Rebuild the cart from the persisted snapshot, once at startup.
    ///
    /// An absent, unreadable, or non-list snapshot yields an empty cart -
    /// startup never fails on cart state. Entries are validated one by one;
    /// invalid ones are dropped with a warning and a duplicated name merges
    /// into the line already rehydrated. The total is recomputed from the
    /// surviving entries, never trusted from storage.
    pub fn rehydrate(&mut self) {
        self.items.clear();

        let raw = match self.storage.load(storage_keys::CART) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                self.total = Decimal::ZERO;
                self.notify();
                return;
            }
            Err(e) => {
                warn!(error = %e, "failed to read cart snapshot, starting empty");
                self.total = Decimal::ZERO;
                self.notify();
                return;
            }
        };

        let entries = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                warn!("cart snapshot is not a list, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "cart snapshot is not valid JSON, starting empty");
                Vec::new()
            }
        };

        for entry in &entries {
            match CartItem::from_value(entry) {
                Ok(item) => {
                    if let Some(existing) = self.items.iter_mut().find(|i| i.name == item.name) {
                        existing.quantity = existing.quantity.saturating_add(item.quantity);
                    } else {
                        self.items.push(item);
                    }
                }
                Err(e) => warn!(error = %e, "dropping invalid cart snapshot entry"),
            }
        }

        self.total = Self::recompute_total(&self.items);
        self.notify();
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Recompute total, persist, notify - the tail of every mutation.
    fn commit(&mut self) {
        self.total = Self::recompute_total(&self.items);
        self.persist();
        self.notify();
    }

    fn recompute_total(items: &[CartItem]) -> Decimal {
        items.iter().map(CartItem::line_total).sum()
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.items) {
            Ok(snapshot) => {
                if let Err(e) = self.storage.save(storage_keys::CART, &snapshot) {
                    warn!(error = %e, "failed to persist cart snapshot");
                }
            }
            Err(e) => warn!(error = %e, "failed to encode cart snapshot"),
        }
    }

    fn notify(&self) {
        if let Some(listener) = &self.listener {
            listener.cart_updated(&self.items, self.total);
        }
    }
}
