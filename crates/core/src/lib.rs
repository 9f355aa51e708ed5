//! Tidecart Core - Shared cart types.
//!
//! This crate provides the types used across all Tidecart components:
//! - `storefront` - Cart and wishlist stores with their storage collaborators
//! - `cli` - Command-line front end over file-backed storage
//!
//! # Architecture
//!
//! The core crate contains only types and the snapshot codec - no I/O, no
//! storage access, no logging. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids, money, line items and products
//! - [`snapshot`] - Typed, validated JSON encoding of persisted state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod snapshot;
pub mod types;

pub use snapshot::SnapshotError;
pub use types::*;
