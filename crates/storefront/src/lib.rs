//! Tidecart Storefront library.
//!
//! Client-side state for the storefront: the cart, the wishlist, and the
//! key-value storage they persist through.
//!
//! # Usage
//!
//! ```rust
//! use tidecart_core::{LineItem, Money, ProductId};
//! use tidecart_storefront::{CartStore, MemoryStorage};
//!
//! let mut cart = CartStore::hydrate(MemoryStorage::new());
//! cart.add_item(LineItem::new("A", "Shirt", Money::from(10), 1).with_variant("M"));
//! cart.add_item(LineItem::new("A", "Shirt", Money::from(10), 2).with_variant("M"));
//!
//! assert_eq!(cart.count(), 3);
//! assert_eq!(cart.total(), Money::from(30));
//!
//! cart.update_quantity(&ProductId::new("A"), Some("M"), 0);
//! assert!(cart.is_empty());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod storage;
pub mod wishlist;

pub use cart::{CartStore, CartSummary};
pub use config::{ConfigError, StoreConfig};
pub use error::StoreError;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use wishlist::WishlistStore;
