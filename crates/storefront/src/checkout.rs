//! Payment trigger.
//!
//! Payment itself is external; this module only decides the outcome from the
//! cart state and performs the one mutation checkout owns: clearing the cart
//! after a confirmed order. The acknowledgment dialog is the caller's job.

use tracing::{info, warn};

use crate::cart::CartStore;
use crate::storage::SnapshotStore;

/// What the payment trigger decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// The order was acknowledged and the cart has been cleared.
    Confirmed,
    /// Nothing to pay for; the cart was left untouched.
    EmptyCart,
}

/// Fire the payment trigger.
///
/// A non-empty cart yields a success acknowledgment and clears the cart
/// (which also deletes the persisted snapshot). An empty cart yields a
/// warning acknowledgment and performs no mutation.
pub fn process_payment<S: SnapshotStore>(cart: &mut CartStore<S>) -> PaymentOutcome {
    if cart.is_empty() {
        warn!("payment requested with an empty cart");
        return PaymentOutcome::EmptyCart;
    }

    info!(lines = cart.len(), total = %cart.total(), "order processed");
    cart.clear();
    PaymentOutcome::Confirmed
}
