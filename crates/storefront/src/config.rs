//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TIDECART_STORAGE_PATH` - File backing [`FileStorage`](crate::storage::FileStorage)
//!   (default: `.tidecart/storage.json`)
//! - `TIDECART_CART_KEY` - Storage key for the cart snapshot (default: `cart`)
//! - `TIDECART_WISHLIST_KEY` - Storage key for the wishlist snapshot (default: `wishlist`)

use std::path::PathBuf;

use thiserror::Error;

use crate::storage::keys;

const DEFAULT_STORAGE_PATH: &str = ".tidecart/storage.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the JSON file holding persisted snapshots
    pub storage_path: PathBuf,
    /// Storage key for the cart
    pub cart_key: String,
    /// Storage key for the wishlist
    pub wishlist_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            cart_key: keys::CART.to_string(),
            wishlist_key: keys::WISHLIST.to_string(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a key is empty or both stores would share a key.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`StoreConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let storage_path = PathBuf::from(get_or_default("TIDECART_STORAGE_PATH", DEFAULT_STORAGE_PATH));
        let cart_key = get_or_default("TIDECART_CART_KEY", keys::CART);
        let wishlist_key = get_or_default("TIDECART_WISHLIST_KEY", keys::WISHLIST);

        if storage_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "TIDECART_STORAGE_PATH".to_string(),
                "must not be empty".to_string(),
            ));
        }
        validate_key(&cart_key, "TIDECART_CART_KEY")?;
        validate_key(&wishlist_key, "TIDECART_WISHLIST_KEY")?;
        if cart_key == wishlist_key {
            return Err(ConfigError::InvalidEnvVar(
                "TIDECART_WISHLIST_KEY".to_string(),
                format!("must differ from the cart key ({cart_key})"),
            ));
        }

        Ok(Self {
            storage_path,
            cart_key,
            wishlist_key,
        })
    }
}

/// Validate that a storage key is usable.
fn validate_key(value: &str, var_name: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.cart_key, "cart");
        assert_eq!(config.wishlist_key, "wishlist");
    }

    #[test]
    fn test_overrides() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("TIDECART_STORAGE_PATH", "/tmp/cart.json"),
            ("TIDECART_CART_KEY", "bag"),
            ("TIDECART_WISHLIST_KEY", "saved"),
        ]))
        .unwrap();

        assert_eq!(config.storage_path, PathBuf::from("/tmp/cart.json"));
        assert_eq!(config.cart_key, "bag");
        assert_eq!(config.wishlist_key, "saved");
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = StoreConfig::from_lookup(lookup(&[("TIDECART_CART_KEY", "  ")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(name, _)) if name == "TIDECART_CART_KEY"));
    }

    #[test]
    fn test_empty_path_rejected() {
        let result = StoreConfig::from_lookup(lookup(&[("TIDECART_STORAGE_PATH", "")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_shared_key_rejected() {
        let result = StoreConfig::from_lookup(lookup(&[("TIDECART_WISHLIST_KEY", "cart")]));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("must differ"));
    }
}
