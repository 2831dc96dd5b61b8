//! Cart store and derived totals
//!
//! The cart is an ordered sequence of meal snapshots frozen at add time;
//! editing the catalog afterwards never changes a cart line. Each "add"
//! appends a distinct line (no quantity increments). State is persisted to
//! session storage on every mutation, in the same synchronous block, so
//! interleaved callbacks cannot lose updates.

use std::sync::Arc;

use crate::error::{ClientError, ClientResult};
use crate::session::IdentityStore;
use crate::storage::SessionStore;
use shared::models::MealSnapshot;

/// Flat delivery fee, charged only on non-empty carts
pub const DELIVERY_FEE: f64 = 50.0;

/// Storage key for the persisted cart blob
pub const CART_STORAGE_KEY: &str = "selected_meals";

/// Derived cart totals; recomputed on demand, never cached
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartTotals {
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
}

/// Read-only view of the cart: ordered lines plus derived totals
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<MealSnapshot>,
    pub totals: CartTotals,
}

/// Session-scoped cart of selected meal snapshots
pub struct CartStore {
    storage: Arc<dyn SessionStore>,
    items: Vec<MealSnapshot>,
}

impl CartStore {
    /// Restore the cart from session storage
    ///
    /// A missing or corrupted persisted value initializes an empty cart.
    pub fn load(storage: Arc<dyn SessionStore>) -> Self {
        let items = match storage.get(CART_STORAGE_KEY) {
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding corrupted cart blob");
                    storage.remove(CART_STORAGE_KEY);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Self { storage, items }
    }

    /// Append a snapshot to the end of the cart
    ///
    /// Requires a logged-in customer identity; the caller should redirect to
    /// login on `Unauthenticated` rather than drop the item.
    pub fn add(&mut self, identity: &IdentityStore, snapshot: MealSnapshot) -> ClientResult<()> {
        if identity.customer().is_none() {
            tracing::debug!(meal = %snapshot.name, "Add to cart without customer identity");
            return Err(ClientError::Unauthenticated);
        }

        tracing::debug!(meal = %snapshot.name, price = snapshot.price, "Added to cart");
        self.items.push(snapshot);
        self.persist();
        Ok(())
    }

    /// Remove the line at `index`; remaining lines keep their order
    pub fn remove(&mut self, index: usize) -> ClientResult<MealSnapshot> {
        if index >= self.items.len() {
            tracing::warn!(index, len = self.items.len(), "Cart remove out of range");
            return Err(ClientError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let removed = self.items.remove(index);
        self.persist();
        Ok(removed)
    }

    /// Empty the cart unconditionally (order placed, or logout)
    pub fn clear(&mut self) {
        self.items.clear();
        self.storage.remove(CART_STORAGE_KEY);
    }

    /// Current ordered lines plus freshly computed totals
    pub fn snapshot(&self) -> CartView {
        CartView {
            items: self.items.clone(),
            totals: self.totals(),
        }
    }

    /// Derived totals: subtotal plus the delivery fee on non-empty carts
    pub fn totals(&self) -> CartTotals {
        let subtotal: f64 = self.items.iter().map(|item| item.price).sum();
        let delivery_fee = if self.items.is_empty() { 0.0 } else { DELIVERY_FEE };
        CartTotals {
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
        }
    }

    pub fn items(&self) -> &[MealSnapshot] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) {
        match serde_json::to_string(&self.items) {
            Ok(blob) => self.storage.set(CART_STORAGE_KEY, &blob),
            Err(e) => tracing::warn!(error = %e, "Failed to persist cart"),
        }
    }
}

/// In-memory wishlist, deduplicated by meal id
///
/// Unlike the cart this is not persisted; it lives only as long as the
/// process, matching the service's wishlist behavior.
#[derive(Debug, Default)]
pub struct WishlistStore {
    items: Vec<MealSnapshot>,
}

impl WishlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a meal unless it is already wished for
    pub fn add(&mut self, snapshot: MealSnapshot) {
        if !self.items.iter().any(|item| item.id == snapshot.id) {
            self.items.push(snapshot);
        }
    }

    pub fn items(&self) -> &[MealSnapshot] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
