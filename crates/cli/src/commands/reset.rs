//! Wipe persisted state, as a user clearing site data would.

use tidecart_storefront::Storage;
use tidecart_storefront::error::Result;

/// Remove the given keys from storage.
///
/// # Errors
///
/// Returns an error if the storage backend cannot persist the removal.
pub fn run<S: Storage>(mut storage: S, keys: &[&str]) -> Result<String> {
    for key in keys {
        storage.remove(key)?;
        tracing::info!(key, "Removed stored snapshot");
    }
    Ok(format!("Cleared {} stored keys", keys.len()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tidecart_storefront::MemoryStorage;

    use super::*;

    #[test]
    fn test_reset_removes_keys() {
        let mut storage = MemoryStorage::with_entry("cart", "[]");
        storage.set("wishlist", "[]".to_string()).unwrap();
        storage.set("other", "keep".to_string()).unwrap();

        let output = run(&mut storage, &["cart", "wishlist"]).unwrap();
        assert_eq!(output, "Cleared 2 stored keys");
        assert_eq!(storage.get("cart"), None);
        assert_eq!(storage.get("other").as_deref(), Some("keep"));
    }
}
