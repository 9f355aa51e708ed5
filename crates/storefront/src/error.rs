//! Unified error type for front ends.
//!
//! Store operations never fail; errors only arise while wiring a session up
//! (loading configuration) or when a front end talks to storage directly.

use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Storefront-level error type.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::from(ConfigError::InvalidEnvVar(
            "TIDECART_CART_KEY".to_string(),
            "must not be empty".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Config error: Invalid environment variable TIDECART_CART_KEY: must not be empty"
        );

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::from(StorageError::from(io));
        assert_eq!(err.to_string(), "Storage error: storage I/O error: denied");
    }
}
