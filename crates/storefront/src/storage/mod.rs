//! Key-value storage collaborators.
//!
//! The stores persist their snapshots through the [`Storage`] trait, the
//! equivalent of a browser's local storage: string keys, string values,
//! synchronous access. Two backends are provided:
//!
//! - [`MemoryStorage`] - in-process map, used by tests and incognito sessions
//! - [`FileStorage`] - a single JSON file that survives restarts

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors that can occur when writing to storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing data could not be serialized.
    #[error("storage serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A synchronous string key-value store.
///
/// Reads never fail: a key that is absent or unreadable is `None`.
pub trait Storage {
    /// Get the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend could not persist the value.
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend could not persist the removal.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Default storage keys.
pub mod keys {
    /// Key holding the cart snapshot.
    pub const CART: &str = "cart";

    /// Key holding the wishlist snapshot.
    pub const WISHLIST: &str = "wishlist";
}
