//! Cart state store.
//!
//! [`CartStore`] owns the cart's line items for one session. It is created
//! once at startup with [`CartStore::hydrate`] and handed by reference to the
//! front end; there is no global instance.
//!
//! Every operation that changes the line items writes a fresh snapshot to
//! storage. Nothing here returns an error to the caller: a corrupt snapshot
//! hydrates as an empty cart and a failed write is logged, leaving the
//! in-memory cart authoritative.

use serde::Serialize;
use tidecart_core::{LineItem, Money, Product, ProductId, snapshot};
use tracing::instrument;

use crate::storage::{Storage, keys};

/// Read-only view of the cart for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary<'a> {
    pub items: &'a [LineItem],
    pub total: Money,
    pub count: u64,
    pub is_open: bool,
}

/// The cart for one session, persisted through a [`Storage`] collaborator.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    key: String,
    items: Vec<LineItem>,
    is_open: bool,
}

impl<S: Storage> CartStore<S> {
    /// Create the store, restoring any cart saved under the default key.
    pub fn hydrate(storage: S) -> Self {
        Self::hydrate_with_key(storage, keys::CART)
    }

    /// Create the store, restoring any cart saved under `key`.
    ///
    /// A missing snapshot gives an empty cart. So does a snapshot that fails
    /// to decode; it is logged and left in storage until the next write
    /// replaces it.
    pub fn hydrate_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = match storage.get(&key) {
            None => Vec::new(),
            Some(raw) => snapshot::decode(&raw).unwrap_or_else(|e| {
                tracing::warn!(key = %key, error = %e, "Discarding unreadable cart snapshot");
                Vec::new()
            }),
        };
        tracing::debug!(key = %key, lines = items.len(), "Cart hydrated");

        Self {
            storage,
            key,
            items,
            is_open: false,
        }
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The line with the given identity, if any.
    #[must_use]
    pub fn line(&self, product_id: &ProductId, variant: Option<&str>) -> Option<&LineItem> {
        self.items
            .iter()
            .find(|item| item.matches(product_id, variant))
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Whether the cart drawer is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns true if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of everything the rendering layer reads.
    #[must_use]
    pub fn summary(&self) -> CartSummary<'_> {
        CartSummary {
            items: &self.items,
            total: self.total(),
            count: self.count(),
            is_open: self.is_open,
        }
    }

    /// The storage key this cart persists under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The storage collaborator.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage collaborator, dropping the in-memory cart.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Add a line, merging into an existing line with the same identity.
    ///
    /// A merged line keeps its position, name, price and image; only its
    /// quantity grows. Callers must pass a quantity of at least one.
    #[instrument(level = "debug", skip(self, item), fields(product_id = %item.product_id, variant = ?item.variant))]
    pub fn add_item(&mut self, item: LineItem) {
        let existing = self
            .items
            .iter_mut()
            .find(|line| line.matches(&item.product_id, item.variant.as_deref()));

        match existing {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(item.quantity);
                tracing::debug!(quantity = line.quantity, "Merged into existing line");
            }
            None => {
                tracing::debug!(quantity = item.quantity, "Appended new line");
                self.items.push(item);
            }
        }

        self.persist();
    }

    /// Add `quantity` of a catalog product.
    pub fn add_product(&mut self, product: &Product, quantity: u32, variant: Option<&str>) {
        self.add_item(LineItem::from_product(product, quantity, variant));
    }

    /// Remove the line with the given identity. Absent lines are ignored.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_item(&mut self, product_id: &ProductId, variant: Option<&str>) {
        let before = self.items.len();
        self.items.retain(|line| !line.matches(product_id, variant));

        if self.items.len() == before {
            tracing::debug!("No matching line to remove");
            return;
        }
        self.persist();
    }

    /// Set the quantity of the line with the given identity.
    ///
    /// A quantity below one removes the line. Absent lines are ignored.
    #[instrument(level = "debug", skip(self))]
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        variant: Option<&str>,
        new_quantity: u32,
    ) {
        if new_quantity < 1 {
            self.remove_item(product_id, variant);
            return;
        }

        let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.matches(product_id, variant))
        else {
            tracing::debug!("No matching line to update");
            return;
        };

        if line.quantity == new_quantity {
            return;
        }
        line.quantity = new_quantity;
        self.persist();
    }

    /// Remove every line.
    ///
    /// Always writes an empty snapshot, replacing whatever storage held.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("Cart cleared");
        self.persist();
    }

    /// Flip the cart drawer open or closed. Returns the new state.
    pub fn toggle_cart_visibility(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    /// Open or close the cart drawer.
    pub fn set_cart_visibility(&mut self, open: bool) {
        self.is_open = open;
    }

    fn persist(&mut self) {
        let raw = match snapshot::encode(&self.items) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to encode cart snapshot");
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.key, raw) {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist cart snapshot");
        }
    }
}
