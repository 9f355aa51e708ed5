//! Wishlist state store.
//!
//! An ordered set of product ids, persisted the same way as the cart.

use tidecart_core::{ProductId, snapshot};

use crate::storage::{Storage, keys};

/// The wishlist for one session.
#[derive(Debug)]
pub struct WishlistStore<S> {
    storage: S,
    key: String,
    items: Vec<ProductId>,
}

impl<S: Storage> WishlistStore<S> {
    /// Create the store, restoring any wishlist saved under the default key.
    pub fn hydrate(storage: S) -> Self {
        Self::hydrate_with_key(storage, keys::WISHLIST)
    }

    /// Create the store, restoring any wishlist saved under `key`.
    pub fn hydrate_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = storage
            .get(&key)
            .map(|raw| {
                snapshot::decode_wishlist(&raw).unwrap_or_else(|e| {
                    tracing::warn!(key = %key, error = %e, "Discarding unreadable wishlist snapshot");
                    Vec::new()
                })
            })
            .unwrap_or_default();

        Self {
            storage,
            key,
            items,
        }
    }

    /// Wishlisted products, oldest first.
    #[must_use]
    pub fn items(&self) -> &[ProductId] {
        &self.items
    }

    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.contains(product_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The storage collaborator.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage collaborator.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Add the product if absent, remove it if present.
    ///
    /// Returns whether the product is wishlisted afterwards.
    pub fn toggle(&mut self, product_id: ProductId) -> bool {
        let wishlisted = match self.items.iter().position(|id| *id == product_id) {
            Some(index) => {
                self.items.remove(index);
                false
            }
            None => {
                self.items.push(product_id);
                true
            }
        };
        tracing::debug!(wishlisted, "Wishlist toggled");

        self.persist();
        wishlisted
    }

    /// Remove every product.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    fn persist(&mut self) {
        let raw = match snapshot::encode_wishlist(&self.items) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to encode wishlist snapshot");
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.key, raw) {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist wishlist snapshot");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut wishlist = WishlistStore::hydrate(MemoryStorage::new());

        assert!(wishlist.toggle(ProductId::new("A")));
        assert!(wishlist.toggle(ProductId::new("B")));
        assert!(wishlist.contains(&ProductId::new("A")));
        assert_eq!(wishlist.len(), 2);

        assert!(!wishlist.toggle(ProductId::new("A")));
        assert_eq!(wishlist.items(), &[ProductId::new("B")]);
    }

    #[test]
    fn test_persists_and_hydrates() {
        let mut wishlist = WishlistStore::hydrate(MemoryStorage::new());
        wishlist.toggle(ProductId::new("A"));
        wishlist.toggle(ProductId::new("B"));

        let storage = wishlist.into_storage();
        assert_eq!(storage.get(keys::WISHLIST).as_deref(), Some(r#"["A","B"]"#));

        let restored = WishlistStore::hydrate(storage);
        assert_eq!(restored.items(), &[ProductId::new("A"), ProductId::new("B")]);
    }

    #[test]
    fn test_corrupt_snapshot_hydrates_empty() {
        let storage = MemoryStorage::with_entry(keys::WISHLIST, r#"["A","A"]"#);
        assert!(WishlistStore::hydrate(storage).is_empty());
    }

    #[test]
    fn test_clear() {
        let mut wishlist = WishlistStore::hydrate(MemoryStorage::new());
        wishlist.toggle(ProductId::new("A"));
        wishlist.clear();
        assert!(wishlist.is_empty());
        assert_eq!(wishlist.storage().get(keys::WISHLIST).as_deref(), Some("[]"));
    }
}
